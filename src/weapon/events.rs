use bevy::prelude::*;

/// Trigger pulled; firing starts on the next fixed step.
#[derive(Message, Debug, Clone, Copy)]
pub struct FireStartEvent;

/// Trigger released; firing stops on the next fixed step.
#[derive(Message, Debug, Clone, Copy)]
pub struct FireStopEvent;

/// Flip between single-shot and spread firing.
#[derive(Message, Debug, Clone, Copy)]
pub struct ToggleFireModeEvent;

/// Nudge the single-shot fire rate; one unit of input is worth 10 rpm.
#[derive(Message, Debug, Clone, Copy)]
pub struct AdjustFireRateEvent {
    pub delta: f32,
}

/// Change the pellet count of a spread burst.
#[derive(Message, Debug, Clone, Copy)]
pub struct AdjustSpreadCountEvent {
    pub delta: i32,
}

/// Point the weapon at a world position. Sent by the targeting layer.
#[derive(Message, Debug, Clone, Copy)]
pub struct FaceTargetEvent {
    pub position: Vec3,
}

/// Tear the weapon down: backend pool released, bullets cleared, entity gone.
#[derive(Message, Debug, Clone, Copy)]
pub struct UnequipWeaponEvent;
