use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::states::GameState;
use crate::weapon::events::*;
use crate::weapon::systems::*;

pub fn plugin(app: &mut App) {
    app.add_message::<FireStartEvent>()
        .add_message::<FireStopEvent>()
        .add_message::<ToggleFireModeEvent>()
        .add_message::<AdjustFireRateEvent>()
        .add_message::<AdjustSpreadCountEvent>()
        .add_message::<FaceTargetEvent>()
        .add_message::<UnequipWeaponEvent>()
        // Facing runs in Movement so it follows the Aiming scan within the
        // same frame.
        .add_systems(
            Update,
            (
                weapon_face_target_system.in_set(GameSet::Movement),
                unequip_weapon_system.in_set(GameSet::Cleanup),
            ),
        )
        // Edges and tuning land whole before the drain runs.
        .add_systems(
            FixedUpdate,
            (apply_weapon_input_system, weapon_fire_system)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_plugin_can_be_added_to_an_app() {
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

        app.add_plugins(plugin);
        app.update();
    }
}
