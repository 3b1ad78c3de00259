use bevy::prelude::*;

use crate::movement::components::from_xz;
use crate::targeting::components::Target;
use crate::weapon::components::Weapon;
use crate::weapon::events::FaceTargetEvent;

/// Ask the weapon to face the nearest target on the ground plane.
///
/// Stand-in for a real aiming layer. With no targets around, no message is
/// sent and the weapon keeps its heading.
pub fn acquire_target_system(
    weapons: Query<&Transform, With<Weapon>>,
    targets: Query<&Transform, (With<Target>, Without<Weapon>)>,
    mut facings: MessageWriter<FaceTargetEvent>,
) {
    let Ok(weapon_transform) = weapons.single() else {
        return;
    };
    let weapon_pos = from_xz(weapon_transform.translation);

    let mut nearest: Option<(Vec3, f32)> = None;
    for transform in targets.iter() {
        let distance = weapon_pos.distance(from_xz(transform.translation));
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((transform.translation, distance));
        }
    }

    if let Some((position, _)) = nearest {
        facings.write(FaceTargetEvent { position });
    }
}
