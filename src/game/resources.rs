use bevy::prelude::*;

use crate::weapon::components::WeaponConfig;

/// Launch options for the firing-range demo, filled from the command line
/// by the binary. Library users and tests fall back to the defaults.
#[derive(Resource, Clone, Debug, Default)]
pub struct DemoSettings {
    pub config: WeaponConfig,
    /// Reuse pooled bullet entities instead of spawning fresh ones.
    pub pooled_spawning: bool,
}

/// Mesh handles shared by everything the demo spawns.
#[derive(Resource, Clone)]
pub struct GameMeshes {
    pub bullet: Handle<Mesh>,
    pub target: Handle<Mesh>,
    pub weapon: Handle<Mesh>,
    pub ground: Handle<Mesh>,
}

/// Material handles shared by everything the demo spawns.
#[derive(Resource, Clone)]
pub struct GameMaterials {
    pub bullet: Handle<StandardMaterial>,
    pub target: Handle<StandardMaterial>,
    pub weapon: Handle<StandardMaterial>,
    pub ground: Handle<StandardMaterial>,
}
