use bevy::prelude::*;

use crate::bullets::events::BulletExpiredEvent;
use crate::spawn::backend::{SpawnBackend, SpawnBackendHandle};

/// Route expired bullets back through the backend that spawned them.
/// The module carries a single equipped weapon, so its backend owns every
/// bullet in flight.
pub fn reclaim_bullets_system(
    mut commands: Commands,
    mut expired: MessageReader<BulletExpiredEvent>,
    mut backends: Query<&mut SpawnBackendHandle>,
) {
    let Ok(mut backend) = backends.single_mut() else {
        return;
    };
    for event in expired.read() {
        backend.0.reclaim(&mut commands, event.bullet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;

    use crate::bullets::components::Bullet;
    use crate::spawn::backend::{DirectInstantiate, PooledEntitySpawn, SpawnBackend};
    use crate::weapon::components::SpawnRequest;

    fn reclaim_app() -> App {
        let mut app = App::new();
        app.add_message::<BulletExpiredEvent>()
            .add_systems(Update, reclaim_bullets_system);
        app
    }

    fn spawn_one_bullet(app: &mut App, backend_entity: Entity) {
        let request = SpawnRequest {
            position: Vec3::new(1.0, 0.0, -2.0),
            heading: Quat::IDENTITY,
        };
        // Drive the backend the way the fire system does.
        let mut state: SystemState<(Commands, Query<&mut SpawnBackendHandle>)> =
            SystemState::new(app.world_mut());
        let (mut commands, mut backends) = state.get_mut(app.world_mut());
        let mut backend = backends.get_mut(backend_entity).unwrap();
        backend.0.spawn(&mut commands, &request);
        state.apply(app.world_mut());
    }

    fn bullet_entities(app: &mut App) -> Vec<Entity> {
        app.world_mut()
            .query_filtered::<Entity, With<Bullet>>()
            .iter(app.world())
            .collect()
    }

    #[test]
    fn direct_backend_despawns_reclaimed_bullets() {
        let mut app = reclaim_app();
        let backend_entity = app
            .world_mut()
            .spawn(SpawnBackendHandle(Box::new(DirectInstantiate::new(None))))
            .id();

        spawn_one_bullet(&mut app, backend_entity);
        let bullets = bullet_entities(&mut app);
        assert_eq!(bullets.len(), 1);

        app.world_mut()
            .write_message(BulletExpiredEvent { bullet: bullets[0] });
        app.update();

        assert!(app.world().get_entity(bullets[0]).is_err());
    }

    #[test]
    fn pooled_backend_parks_and_reuses_entities() {
        let mut app = reclaim_app();
        let backend_entity = app
            .world_mut()
            .spawn(SpawnBackendHandle(Box::new(PooledEntitySpawn::new(None))))
            .id();

        spawn_one_bullet(&mut app, backend_entity);
        let bullets = bullet_entities(&mut app);
        assert_eq!(bullets.len(), 1);
        let first = bullets[0];

        app.world_mut()
            .write_message(BulletExpiredEvent { bullet: first });
        app.update();

        // Parked: the entity survives but is no longer a bullet.
        assert!(app.world().get_entity(first).is_ok());
        assert!(app.world().get::<Bullet>(first).is_none());
        assert_eq!(
            app.world().get::<Visibility>(first),
            Some(&Visibility::Hidden)
        );

        // The next spawn reuses the parked entity instead of a fresh one.
        spawn_one_bullet(&mut app, backend_entity);
        let bullets = bullet_entities(&mut app);
        assert_eq!(bullets, vec![first]);
        assert_eq!(
            app.world().get::<Visibility>(first),
            Some(&Visibility::Inherited)
        );
    }

    #[test]
    fn dispose_empties_the_pool() {
        let mut app = reclaim_app();
        let backend_entity = app
            .world_mut()
            .spawn(SpawnBackendHandle(Box::new(PooledEntitySpawn::new(None))))
            .id();

        spawn_one_bullet(&mut app, backend_entity);
        let first = bullet_entities(&mut app)[0];
        app.world_mut()
            .write_message(BulletExpiredEvent { bullet: first });
        app.update();
        assert!(app.world().get_entity(first).is_ok());

        let mut state: SystemState<(Commands, Query<&mut SpawnBackendHandle>)> =
            SystemState::new(app.world_mut());
        let (mut commands, mut backends) = state.get_mut(app.world_mut());
        backends
            .get_mut(backend_entity)
            .unwrap()
            .0
            .dispose(&mut commands);
        state.apply(app.world_mut());

        assert!(app.world().get_entity(first).is_err());
    }
}
