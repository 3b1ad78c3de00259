use bevy::prelude::*;

/// Marks an entity the weapon may face. The demo scatters a few of these
/// around the range; a host game would attach it to whatever its aiming
/// layer tracks.
#[derive(Component, Debug, Default)]
pub struct Target;
