use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::plugin::{play_limited_sound, SoundLimiter, WeaponSoundChannel};
use crate::bullets::components::Bullet;
use crate::spawn::backend::{SpawnBackend, SpawnBackendHandle};
use crate::weapon::components::*;
use crate::weapon::events::*;


/// Drain queued edge and tuning messages into the weapon state.
///
/// Runs ahead of the fire system in the same fixed-step chain, so an edge is
/// applied whole before the drain sees it. Starts apply before stops: a pull
/// and release inside one tick leaves the weapon not firing.
pub fn apply_weapon_input_system(
    mut starts: MessageReader<FireStartEvent>,
    mut stops: MessageReader<FireStopEvent>,
    mut toggles: MessageReader<ToggleFireModeEvent>,
    mut rate_adjustments: MessageReader<AdjustFireRateEvent>,
    mut count_adjustments: MessageReader<AdjustSpreadCountEvent>,
    mut weapons: Query<&mut Weapon>,
) {
    let started = starts.read().count() > 0;
    let stopped = stops.read().count() > 0;
    let toggled = toggles.read().count() % 2 == 1;
    let rate_delta: f32 = rate_adjustments.read().map(|event| event.delta).sum();
    let count_delta: i32 = count_adjustments.read().map(|event| event.delta).sum();

    for mut weapon in weapons.iter_mut() {
        if started {
            weapon.on_fire_start();
        }
        if stopped {
            weapon.on_fire_stop();
        }
        if toggled {
            weapon.toggle_mode();
        }
        if rate_delta != 0.0 {
            weapon.adjust_fire_rate(rate_delta);
        }
        if count_delta != 0 {
            weapon.adjust_spread_count(count_delta);
        }
    }
}

/// Fixed-step drive: advance each weapon's cooldown, drain the shots due
/// this tick, and hand one spawn request per bullet to the weapon's backend
/// in emission order.
pub fn weapon_fire_system(
    mut commands: Commands,
    time: Res<Time>,
    asset_server: Option<Res<AssetServer>>,
    weapon_channel: Option<Res<AudioChannel<WeaponSoundChannel>>>,
    mut sound_limiter: Option<ResMut<SoundLimiter>>,
    mut weapons: Query<(&Transform, &mut Weapon, &mut SpawnBackendHandle)>,
) {
    let delta = time.delta_secs();

    for (transform, mut weapon, mut backend) in weapons.iter_mut() {
        let due = match weapon.tick(delta) {
            Ok(due) => due,
            Err(err) => {
                // A bad interval must not be clamped into a usable one here;
                // rates are rejected at assignment time instead.
                error!("weapon misconfigured, skipping emission: {err}");
                continue;
            }
        };
        if due == 0 {
            continue;
        }

        let mut rng = rand::thread_rng();
        for _ in 0..due {
            for request in weapon.shot_spawn_requests(transform, &mut rng) {
                backend.0.spawn(&mut commands, &request);
            }
        }

        // One report per burst, however many pellets it carried.
        if let (Some(asset_server), Some(weapon_channel), Some(sound_limiter)) = (
            asset_server.as_ref(),
            weapon_channel.as_ref(),
            sound_limiter.as_mut(),
        ) {
            play_limited_sound(
                weapon_channel,
                asset_server,
                "sounds/weapon_fire.wav",
                sound_limiter,
            );
        }
    }
}

/// Apply the latest facing request; when several queue up in one frame the
/// newest wins.
pub fn weapon_face_target_system(
    mut messages: MessageReader<FaceTargetEvent>,
    mut weapons: Query<&mut Transform, With<Weapon>>,
) {
    let Some(event) = messages.read().last() else {
        return;
    };
    for mut transform in weapons.iter_mut() {
        face_toward(&mut transform, event.position);
    }
}

/// Tear the weapon down: the backend releases whatever it still holds,
/// bullets in flight are despawned, then the weapon entity itself goes away.
pub fn unequip_weapon_system(
    mut commands: Commands,
    mut unequips: MessageReader<UnequipWeaponEvent>,
    mut weapons: Query<(Entity, &mut SpawnBackendHandle), With<Weapon>>,
    bullets: Query<Entity, With<Bullet>>,
) {
    if unequips.is_empty() {
        return;
    }
    unequips.clear();

    for (weapon_entity, mut backend) in weapons.iter_mut() {
        backend.0.dispose(&mut commands);
        commands.entity(weapon_entity).despawn();
    }
    for bullet in bullets.iter() {
        commands.entity(bullet).despawn();
    }
}
