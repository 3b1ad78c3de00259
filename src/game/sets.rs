use bevy::prelude::*;

/// Per-frame ordering for the gameplay systems.
/// Chained by the game plugin so message producers always run before the
/// systems that consume them in the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Device input → logical weapon messages.
    Input,
    /// Target selection.
    Aiming,
    /// Weapon facing and projectile flight.
    Movement,
    /// Reclamation and teardown.
    Cleanup,
}
