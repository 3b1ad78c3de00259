use bevy::prelude::*;

use crate::game::sets::GameSet;
use crate::spawn::systems::reclaim_bullets_system;

pub fn plugin(app: &mut App) {
    // Runs after lifetimes tick so an expiry is reclaimed the same frame.
    app.add_systems(Update, reclaim_bullets_system.in_set(GameSet::Cleanup));
}
