use bevy::prelude::*;
use rand::Rng;

use crate::fire_timer::{FireTimer, FireTimerError};

/// Lowest rate either firing mode can be tuned down to, in rounds per minute.
/// Keeps the fire interval finite and positive.
pub const MIN_FIRE_RATE_RPM: f32 = 1.0;

/// How many rounds per minute one unit of tuning input is worth.
pub const FIRE_RATE_STEP_RPM: f32 = 10.0;

/// Firing mode: one bullet per due shot, or a jittered burst per due shot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FireMode {
    #[default]
    Single,
    Spread,
}

impl FireMode {
    pub fn toggled(self) -> Self {
        match self {
            FireMode::Single => FireMode::Spread,
            FireMode::Spread => FireMode::Single,
        }
    }
}

/// Authoring-time weapon tuning.
///
/// Values are clamped when the weapon is built, so a hand-edited config can
/// never produce a non-positive fire interval or an empty burst.
#[derive(Clone, Debug, PartialEq)]
pub struct WeaponConfig {
    pub fire_rate_rpm: f32,
    pub spread_fire_rate_rpm: f32,
    pub spread_bullet_count: u32,
    pub spread_angle_degrees: f32,
    pub muzzle_offset: f32,
    pub firing_enabled: bool,
    pub mode: FireMode,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            fire_rate_rpm: 300.0,
            spread_fire_rate_rpm: 90.0,
            spread_bullet_count: 6,
            spread_angle_degrees: 30.0,
            muzzle_offset: 0.6,
            firing_enabled: true,
            mode: FireMode::Single,
        }
    }
}

/// A single projectile spawn: where the bullet appears and which way it
/// faces. Produced per bullet and handed straight to the spawn backend,
/// never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRequest {
    pub position: Vec3,
    /// Heading-only rotation, constrained to the horizontal plane.
    pub heading: Quat,
}

/// Weapon firing state and tuning.
///
/// Rate and count fields sit behind clamping setters so a running weapon can
/// never reach a non-positive fire interval. Owned exclusively by the weapon
/// entity; created at equip time, dropped when the entity despawns.
#[derive(Component, Clone, Debug)]
pub struct Weapon {
    firing_enabled: bool,
    is_firing: bool,
    mode: FireMode,
    fire_rate_rpm: f32,
    spread_fire_rate_rpm: f32,
    spread_bullet_count: u32,
    pub spread_angle_degrees: f32,
    pub muzzle_offset: f32,
    timer: FireTimer,
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(WeaponConfig::default())
    }
}

impl Weapon {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            firing_enabled: config.firing_enabled,
            is_firing: false,
            mode: config.mode,
            fire_rate_rpm: config.fire_rate_rpm.max(MIN_FIRE_RATE_RPM),
            spread_fire_rate_rpm: config.spread_fire_rate_rpm.max(MIN_FIRE_RATE_RPM),
            spread_bullet_count: config.spread_bullet_count.max(1),
            spread_angle_degrees: config.spread_angle_degrees.max(0.0),
            muzzle_offset: config.muzzle_offset,
            timer: FireTimer::new(),
        }
    }

    /// Trigger pulled. Re-arms the timer so the first shot of a fresh pull is
    /// immediate while leftover cooldown from a just-fired shot still counts.
    pub fn on_fire_start(&mut self) {
        if !self.is_firing {
            self.is_firing = true;
            self.timer.rearm();
        }
    }

    /// Trigger released. Takes effect on the next tick.
    pub fn on_fire_stop(&mut self) {
        self.is_firing = false;
    }

    pub fn is_firing(&self) -> bool {
        self.is_firing
    }

    pub fn firing_enabled(&self) -> bool {
        self.firing_enabled
    }

    pub fn set_firing_enabled(&mut self, enabled: bool) {
        self.firing_enabled = enabled;
    }

    pub fn mode(&self) -> FireMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: FireMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn fire_rate_rpm(&self) -> f32 {
        self.fire_rate_rpm
    }

    pub fn set_fire_rate_rpm(&mut self, rpm: f32) {
        self.fire_rate_rpm = rpm.max(MIN_FIRE_RATE_RPM);
    }

    pub fn spread_fire_rate_rpm(&self) -> f32 {
        self.spread_fire_rate_rpm
    }

    pub fn set_spread_fire_rate_rpm(&mut self, rpm: f32) {
        self.spread_fire_rate_rpm = rpm.max(MIN_FIRE_RATE_RPM);
    }

    pub fn spread_bullet_count(&self) -> u32 {
        self.spread_bullet_count
    }

    pub fn set_spread_bullet_count(&mut self, count: u32) {
        self.spread_bullet_count = count.max(1);
    }

    /// Nudge the single-shot fire rate by `delta` units of input.
    pub fn adjust_fire_rate(&mut self, delta: f32) {
        self.set_fire_rate_rpm(self.fire_rate_rpm + delta * FIRE_RATE_STEP_RPM);
    }

    /// Grow or shrink the spread burst, never below one bullet.
    pub fn adjust_spread_count(&mut self, delta: i32) {
        let count = self.spread_bullet_count as i64 + delta as i64;
        self.spread_bullet_count = count.clamp(1, u32::MAX as i64) as u32;
    }

    /// Seconds between shots for the currently selected mode.
    pub fn current_interval(&self) -> f32 {
        let rpm = match self.mode {
            FireMode::Single => self.fire_rate_rpm,
            FireMode::Spread => self.spread_fire_rate_rpm,
        };
        60.0 / rpm
    }

    /// Advance the cooldown and report how many shots are due this tick.
    ///
    /// Time keeps accumulating while the trigger is up or the weapon is
    /// disabled; the debt from that idle stretch is cleared by the re-arm on
    /// the next trigger pull, not paid out as shots.
    pub fn tick(&mut self, delta_seconds: f32) -> Result<u32, FireTimerError> {
        self.timer.advance(delta_seconds);
        if self.is_firing && self.firing_enabled {
            self.timer.drain_due_shots(self.current_interval())
        } else {
            Ok(0)
        }
    }

    /// Build the spawn requests for one due shot.
    ///
    /// Single mode: one bullet straight ahead of the muzzle. Spread mode:
    /// `spread_bullet_count` bullets, each deviated by a uniform random yaw
    /// in ±`spread_angle_degrees`/2 applied on top of the previous pellet's
    /// heading: deviations compound across the burst rather than fanning
    /// from a fixed baseline.
    pub fn shot_spawn_requests<R: Rng>(
        &self,
        transform: &Transform,
        rng: &mut R,
    ) -> Vec<SpawnRequest> {
        match self.mode {
            FireMode::Single => {
                let heading = transform.rotation;
                vec![SpawnRequest {
                    position: transform.translation + heading * Vec3::NEG_Z * self.muzzle_offset,
                    heading,
                }]
            }
            FireMode::Spread => {
                let half = self.spread_angle_degrees / 2.0;
                let mut heading = transform.rotation;
                let mut requests = Vec::with_capacity(self.spread_bullet_count as usize);
                for _ in 0..self.spread_bullet_count {
                    let deviation: f32 = rng.gen_range(-half..=half);
                    heading = Quat::from_rotation_y(deviation.to_radians()) * heading;
                    requests.push(SpawnRequest {
                        position: transform.translation
                            + heading * Vec3::NEG_Z * self.muzzle_offset,
                        heading,
                    });
                }
                requests
            }
        }
    }
}

/// Face a transform toward a world-space point, constrained to the
/// horizontal plane.
///
/// Returns false and leaves the rotation untouched when the target sits on
/// the vertical axis through the transform, where there is no horizontal
/// direction to face.
pub fn face_toward(transform: &mut Transform, target: Vec3) -> bool {
    let mut direction = target - transform.translation;
    direction.y = 0.0;
    if direction.length_squared() < 1e-8 {
        return false;
    }
    transform.look_to(direction, Vec3::Y);
    true
}
