use bevy::prelude::*;

use crate::bullets::components::Bullet;
use crate::weapon::components::SpawnRequest;

/// Shared handles for bullet visuals, captured when a backend is built.
/// Absent in headless runs and tests; bullets then spawn as bare logic
/// entities.
#[derive(Clone, Debug)]
pub struct BulletVisuals {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Capability for turning spawn requests into projectile entities.
///
/// A backend is handed to the weapon entity when it is equipped; there is no
/// global backend selection. `dispose` releases everything the backend still
/// holds, at a point the caller chooses.
pub trait SpawnBackend: Send + Sync + 'static {
    /// Instantiate one bullet at the requested pose. Called once per bullet,
    /// synchronously, in emission order.
    fn spawn(&mut self, commands: &mut Commands, request: &SpawnRequest);

    /// Take back a bullet whose flight ended.
    fn reclaim(&mut self, commands: &mut Commands, bullet: Entity);

    /// Release every entity the backend still holds.
    fn dispose(&mut self, commands: &mut Commands);
}

/// Boxed backend attached to the weapon entity.
#[derive(Component)]
pub struct SpawnBackendHandle(pub Box<dyn SpawnBackend>);

fn bullet_bundle(request: &SpawnRequest) -> (Bullet, Transform) {
    (
        Bullet::from_heading(request.heading),
        Transform::from_translation(request.position).with_rotation(request.heading),
    )
}

/// Fresh entity per bullet; reclaiming is a plain despawn.
#[derive(Default)]
pub struct DirectInstantiate {
    visuals: Option<BulletVisuals>,
}

impl DirectInstantiate {
    pub fn new(visuals: Option<BulletVisuals>) -> Self {
        Self { visuals }
    }
}

impl SpawnBackend for DirectInstantiate {
    fn spawn(&mut self, commands: &mut Commands, request: &SpawnRequest) {
        let (bullet, transform) = bullet_bundle(request);
        match &self.visuals {
            Some(visuals) => {
                commands.spawn((
                    bullet,
                    transform,
                    Mesh3d(visuals.mesh.clone()),
                    MeshMaterial3d(visuals.material.clone()),
                ));
            }
            None => {
                commands.spawn((bullet, transform));
            }
        }
    }

    fn reclaim(&mut self, commands: &mut Commands, bullet: Entity) {
        commands.entity(bullet).despawn();
    }

    fn dispose(&mut self, _commands: &mut Commands) {}
}

/// Free-list pool of bullet entities.
///
/// Spawning reuses a parked entity when one is available; reclaiming parks
/// the entity hidden instead of despawning it; disposing empties the pool
/// for good.
pub struct PooledEntitySpawn {
    visuals: Option<BulletVisuals>,
    free: Vec<Entity>,
}

impl PooledEntitySpawn {
    pub fn new(visuals: Option<BulletVisuals>) -> Self {
        Self {
            visuals,
            free: Vec::new(),
        }
    }

    /// Entities currently parked in the pool.
    pub fn pooled(&self) -> usize {
        self.free.len()
    }
}

impl SpawnBackend for PooledEntitySpawn {
    fn spawn(&mut self, commands: &mut Commands, request: &SpawnRequest) {
        let (bullet, transform) = bullet_bundle(request);
        if let Some(entity) = self.free.pop() {
            commands
                .entity(entity)
                .insert((bullet, transform, Visibility::Inherited));
        } else {
            match &self.visuals {
                Some(visuals) => {
                    commands.spawn((
                        bullet,
                        transform,
                        Mesh3d(visuals.mesh.clone()),
                        MeshMaterial3d(visuals.material.clone()),
                    ));
                }
                None => {
                    commands.spawn((bullet, transform));
                }
            }
        }
    }

    fn reclaim(&mut self, commands: &mut Commands, bullet: Entity) {
        // Parked bullets keep their entity id but stop being bullets.
        commands
            .entity(bullet)
            .remove::<Bullet>()
            .insert(Visibility::Hidden);
        self.free.push(bullet);
    }

    fn dispose(&mut self, commands: &mut Commands) {
        for entity in self.free.drain(..) {
            commands.entity(entity).despawn();
        }
    }
}
