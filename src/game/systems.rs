use bevy::prelude::*;

use crate::game::resources::*;
use crate::spawn::backend::{
    BulletVisuals, DirectInstantiate, PooledEntitySpawn, SpawnBackend, SpawnBackendHandle,
};
use crate::targeting::components::Target;
use crate::weapon::components::Weapon;

/// Height the weapon sits at above the ground plane.
const WEAPON_Y_HEIGHT: f32 = 0.5;

/// Target dummy positions on the ground plane.
const TARGET_POSITIONS: [(f32, f32); 4] = [(8.0, -6.0), (-7.0, -9.0), (10.0, 7.0), (-9.0, 8.0)];

/// Build the firing range: camera, light, ground, a handful of target
/// dummies, and the weapon with its spawn backend.
///
/// Headless runs have no mesh assets to build with, so they skip the scene
/// entirely and spawn their own weapon where a test needs one.
pub fn setup_game(
    mut commands: Commands,
    settings: Res<DemoSettings>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };

    let game_meshes = GameMeshes {
        bullet: meshes.add(Sphere::new(0.12)),
        target: meshes.add(Capsule3d::new(0.35, 1.2)),
        weapon: meshes.add(Cuboid::new(0.4, 0.4, 1.2)),
        ground: meshes.add(Plane3d::default().mesh().size(40.0, 40.0)),
    };
    let game_materials = GameMaterials {
        bullet: materials.add(Color::srgb(1.0, 0.9, 0.2)),
        target: materials.add(Color::srgb(0.7, 0.2, 0.2)),
        weapon: materials.add(Color::srgb(0.25, 0.35, 0.8)),
        ground: materials.add(Color::srgb(0.18, 0.22, 0.18)),
    };

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 16.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -1.0, 0.4, 0.0)),
    ));
    commands.spawn((
        Mesh3d(game_meshes.ground.clone()),
        MeshMaterial3d(game_materials.ground.clone()),
        Transform::default(),
    ));

    for (x, z) in TARGET_POSITIONS {
        commands.spawn((
            Target,
            Mesh3d(game_meshes.target.clone()),
            MeshMaterial3d(game_materials.target.clone()),
            Transform::from_xyz(x, 0.6, z),
        ));
    }

    let visuals = Some(BulletVisuals {
        mesh: game_meshes.bullet.clone(),
        material: game_materials.bullet.clone(),
    });
    let backend: Box<dyn SpawnBackend> = if settings.pooled_spawning {
        Box::new(PooledEntitySpawn::new(visuals))
    } else {
        Box::new(DirectInstantiate::new(visuals))
    };

    commands.spawn((
        Weapon::new(settings.config.clone()),
        SpawnBackendHandle(backend),
        Mesh3d(game_meshes.weapon.clone()),
        MeshMaterial3d(game_materials.weapon.clone()),
        Transform::from_xyz(0.0, WEAPON_Y_HEIGHT, 0.0),
    ));

    commands.insert_resource(game_meshes);
    commands.insert_resource(game_materials);
}
