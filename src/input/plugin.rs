use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::input::components::InputBindings;
use crate::input::systems::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<InputBindings>()
        .add_systems(
            Update,
            (
                fire_input_system,
                toggle_mode_input_system,
                tuning_input_system,
                unequip_input_system,
            )
                .in_set(GameSet::Input),
        )
        // Pause must keep running while paused, so it sits outside the
        // gameplay sets.
        .add_systems(Update, pause_input_system);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::GameState;
    use crate::weapon::events::*;

    #[test]
    fn input_plugin_can_be_added_to_an_app() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Aiming,
                GameSet::Movement,
                GameSet::Cleanup,
            )
                .chain(),
        );
        app.init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_message::<bevy::input::mouse::MouseWheel>()
            .add_message::<FireStartEvent>()
            .add_message::<FireStopEvent>()
            .add_message::<ToggleFireModeEvent>()
            .add_message::<AdjustFireRateEvent>()
            .add_message::<AdjustSpreadCountEvent>()
            .add_message::<UnequipWeaponEvent>();

        app.add_plugins(plugin);
        app.update();
    }

    #[test]
    fn pause_key_flips_the_state() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.init_resource::<InputBindings>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, pause_input_system);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Escape);
        app.update();
        // State transitions apply during the next StateTransition pass.
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear_just_pressed(KeyCode::Escape);
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::Paused
        );
    }
}
