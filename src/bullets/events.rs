use bevy::prelude::*;

/// A bullet's lifetime ran out. The backend that spawned it decides whether
/// the entity is despawned or parked for reuse.
#[derive(Message, Debug, Clone, Copy)]
pub struct BulletExpiredEvent {
    pub bullet: Entity,
}
