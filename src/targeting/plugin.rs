use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::targeting::systems::acquire_target_system;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, acquire_target_system.in_set(GameSet::Aiming));
}
