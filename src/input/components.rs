use bevy::prelude::*;

/// Device-to-action mapping for both input profiles.
///
/// The tables are plain data so a host game can rebind controls without
/// touching the systems that read them. Which physical device produced an
/// action is invisible downstream; everything arrives as weapon messages.
#[derive(Resource, Clone, Debug)]
pub struct InputBindings {
    // Keyboard + mouse profile.
    pub fire_button: MouseButton,
    pub toggle_mode_key: KeyCode,
    /// Held while scrolling to tune the fire rate.
    pub fire_rate_modifier: KeyCode,
    /// Held while scrolling to tune the spread bullet count.
    pub spread_count_modifier: KeyCode,
    pub pause_key: KeyCode,
    pub unequip_key: KeyCode,

    // Gamepad profile.
    pub gamepad_fire_button: GamepadButton,
    pub gamepad_toggle_mode_button: GamepadButton,
    pub gamepad_fire_rate_up: GamepadButton,
    pub gamepad_fire_rate_down: GamepadButton,
    pub gamepad_spread_count_up: GamepadButton,
    pub gamepad_spread_count_down: GamepadButton,
    pub gamepad_pause_button: GamepadButton,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            fire_button: MouseButton::Left,
            toggle_mode_key: KeyCode::KeyT,
            fire_rate_modifier: KeyCode::ShiftLeft,
            spread_count_modifier: KeyCode::ControlLeft,
            pause_key: KeyCode::Escape,
            unequip_key: KeyCode::Backspace,
            gamepad_fire_button: GamepadButton::RightTrigger2,
            gamepad_toggle_mode_button: GamepadButton::North,
            gamepad_fire_rate_up: GamepadButton::DPadUp,
            gamepad_fire_rate_down: GamepadButton::DPadDown,
            gamepad_spread_count_up: GamepadButton::DPadRight,
            gamepad_spread_count_down: GamepadButton::DPadLeft,
            gamepad_pause_button: GamepadButton::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_use_distinct_modifiers() {
        let bindings = InputBindings::default();
        // The two tuning axes share the wheel; only the modifier separates
        // them.
        assert_ne!(bindings.fire_rate_modifier, bindings.spread_count_modifier);
    }

    #[test]
    fn default_bindings_fire_from_both_profiles() {
        let bindings = InputBindings::default();
        assert_eq!(bindings.fire_button, MouseButton::Left);
        assert_eq!(bindings.gamepad_fire_button, GamepadButton::RightTrigger2);
    }
}
