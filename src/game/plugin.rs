use bevy::prelude::*;

use crate::game::resources::DemoSettings;
use crate::game::sets::GameSet;
use crate::game::systems::setup_game;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<DemoSettings>()
        // The weapon drains on a fixed simulation step, not the frame rate.
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Aiming,
                GameSet::Movement,
                GameSet::Cleanup,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(Startup, setup_game);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_plugin_can_be_added_to_an_app() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();

        app.add_plugins(plugin);
        app.update();
    }

    #[test]
    fn game_plugin_configures_a_fixed_timestep() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.add_plugins(plugin);

        let fixed = app.world().resource::<Time<Fixed>>();
        assert!((fixed.timestep().as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }
}
