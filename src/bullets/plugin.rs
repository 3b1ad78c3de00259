use bevy::prelude::*;

use crate::bullets::events::BulletExpiredEvent;
use crate::bullets::systems::*;
use crate::game::sets::GameSet;

pub fn plugin(app: &mut App) {
    app.add_message::<BulletExpiredEvent>().add_systems(
        Update,
        (bullet_movement_system, bullet_lifetime_system)
            .chain()
            .in_set(GameSet::Movement),
    );
}
