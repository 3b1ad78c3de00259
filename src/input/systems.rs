use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use crate::input::components::InputBindings;
use crate::states::GameState;
use crate::weapon::events::*;

/// Emit fire edges from the held state of either device profile.
///
/// The trigger counts as held while any bound control is down, so releasing
/// the mouse button while the gamepad trigger is still held emits no stop
/// edge.
pub fn fire_input_system(
    bindings: Res<InputBindings>,
    mouse: Res<ButtonInput<MouseButton>>,
    gamepads: Query<&Gamepad>,
    mut held: Local<bool>,
    mut starts: MessageWriter<FireStartEvent>,
    mut stops: MessageWriter<FireStopEvent>,
) {
    let mouse_held = mouse.pressed(bindings.fire_button);
    let pad_held = gamepads
        .iter()
        .any(|gamepad| gamepad.pressed(bindings.gamepad_fire_button));
    let now_held = mouse_held || pad_held;

    if now_held && !*held {
        starts.write(FireStartEvent);
    } else if !now_held && *held {
        stops.write(FireStopEvent);
    }
    *held = now_held;
}

/// Flip the firing mode on the bound key or button.
pub fn toggle_mode_input_system(
    bindings: Res<InputBindings>,
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut toggles: MessageWriter<ToggleFireModeEvent>,
) {
    let pressed = keys.just_pressed(bindings.toggle_mode_key)
        || gamepads
            .iter()
            .any(|gamepad| gamepad.just_pressed(bindings.gamepad_toggle_mode_button));
    if pressed {
        toggles.write(ToggleFireModeEvent);
    }
}

/// Route tuning input into the matching adjustment message.
///
/// On keyboard+mouse the wheel is the axis and the held modifier picks what
/// it tunes, scaled by scroll magnitude. On gamepad the d-pad steps one unit
/// per press.
pub fn tuning_input_system(
    bindings: Res<InputBindings>,
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut wheel: MessageReader<MouseWheel>,
    mut rate_adjustments: MessageWriter<AdjustFireRateEvent>,
    mut count_adjustments: MessageWriter<AdjustSpreadCountEvent>,
) {
    let scroll: f32 = wheel.read().map(|event| event.y).sum();
    if scroll != 0.0 {
        if keys.pressed(bindings.fire_rate_modifier) {
            rate_adjustments.write(AdjustFireRateEvent { delta: scroll });
        } else if keys.pressed(bindings.spread_count_modifier) {
            let steps = scroll.round() as i32;
            if steps != 0 {
                count_adjustments.write(AdjustSpreadCountEvent { delta: steps });
            }
        }
    }

    for gamepad in gamepads.iter() {
        if gamepad.just_pressed(bindings.gamepad_fire_rate_up) {
            rate_adjustments.write(AdjustFireRateEvent { delta: 1.0 });
        }
        if gamepad.just_pressed(bindings.gamepad_fire_rate_down) {
            rate_adjustments.write(AdjustFireRateEvent { delta: -1.0 });
        }
        if gamepad.just_pressed(bindings.gamepad_spread_count_up) {
            count_adjustments.write(AdjustSpreadCountEvent { delta: 1 });
        }
        if gamepad.just_pressed(bindings.gamepad_spread_count_down) {
            count_adjustments.write(AdjustSpreadCountEvent { delta: -1 });
        }
    }
}

/// Ask for weapon teardown on the bound key.
pub fn unequip_input_system(
    bindings: Res<InputBindings>,
    keys: Res<ButtonInput<KeyCode>>,
    mut unequips: MessageWriter<UnequipWeaponEvent>,
) {
    if keys.just_pressed(bindings.unequip_key) {
        unequips.write(UnequipWeaponEvent);
    }
}

/// Flip between running and paused. Runs in both states, outside the
/// gameplay sets.
pub fn pause_input_system(
    bindings: Res<InputBindings>,
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let pressed = keys.just_pressed(bindings.pause_key)
        || gamepads
            .iter()
            .any(|gamepad| gamepad.just_pressed(bindings.gamepad_pause_button));
    if !pressed {
        return;
    }

    match state.get() {
        GameState::InGame => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::InGame),
    }
}
