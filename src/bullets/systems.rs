use bevy::prelude::*;

use crate::bullets::components::Bullet;
use crate::bullets::events::BulletExpiredEvent;
use crate::movement::components::to_xz;

/// Move bullets along their heading on the XZ plane.
pub fn bullet_movement_system(time: Res<Time>, mut bullets: Query<(&Bullet, &mut Transform)>) {
    for (bullet, mut transform) in bullets.iter_mut() {
        transform.translation += to_xz(bullet.direction) * bullet.speed * time.delta_secs();
    }
}

/// Tick lifetimes and report expired bullets for reclamation.
pub fn bullet_lifetime_system(
    time: Res<Time>,
    mut bullets: Query<(Entity, &mut Bullet)>,
    mut expired: MessageWriter<BulletExpiredEvent>,
) {
    for (entity, mut bullet) in bullets.iter_mut() {
        bullet.lifetime.tick(time.delta());
        if bullet.lifetime.just_finished() {
            expired.write(BulletExpiredEvent { bullet: entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn bullets_advance_along_their_direction() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_systems(Update, bullet_movement_system);

        let bullet_entity = app
            .world_mut()
            .spawn((
                Bullet {
                    direction: Vec2::new(1.0, 0.0),
                    speed: 10.0,
                    lifetime: Timer::from_seconds(5.0, TimerMode::Once),
                },
                Transform::default(),
            ))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.5));
        app.update();

        let transform = app.world().get::<Transform>(bullet_entity).unwrap();
        assert!((transform.translation - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn expired_bullets_are_reported_exactly_once() {
        let mut app = App::new();
        app.init_resource::<Time>()
            .add_message::<BulletExpiredEvent>()
            .add_systems(Update, bullet_lifetime_system);

        app.world_mut().spawn((
            Bullet {
                direction: Vec2::new(0.0, -1.0),
                speed: 1.0,
                lifetime: Timer::from_seconds(0.1, TimerMode::Once),
            },
            Transform::default(),
        ));

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.2));
        app.update();
        let expired = app.world().resource::<Messages<BulletExpiredEvent>>();
        assert_eq!(expired.len(), 1);

        // A finished timer must not keep reporting.
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.2));
        app.update();
        let expired = app.world().resource::<Messages<BulletExpiredEvent>>();
        assert_eq!(expired.len(), 1);
    }
}
