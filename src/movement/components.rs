use bevy::prelude::*;

/// Lift a ground-plane vector into 3D space on the XZ plane (Y=0).
#[inline]
pub fn to_xz(v: Vec2) -> Vec3 {
    Vec3::new(v.x, 0.0, v.y)
}

/// Project a 3D position onto the ground plane as a Vec2.
/// Distance checks between gameplay entities happen in this space.
#[inline]
pub fn from_xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Ground-plane direction a heading rotation points at.
/// Headings in this module stay on the horizontal plane, so the projection
/// loses nothing.
#[inline]
pub fn heading_to_xz(heading: Quat) -> Vec2 {
    from_xz(heading * Vec3::NEG_Z).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_xz_puts_y_on_the_ground() {
        assert_eq!(to_xz(Vec2::new(3.0, -2.0)), Vec3::new(3.0, 0.0, -2.0));
    }

    #[test]
    fn from_xz_drops_height() {
        assert_eq!(from_xz(Vec3::new(1.0, 99.0, 4.0)), Vec2::new(1.0, 4.0));
    }

    #[test]
    fn heading_to_xz_identity_points_forward() {
        // Bevy's forward is -Z, which projects to (0, -1) on the plane.
        let dir = heading_to_xz(Quat::IDENTITY);
        assert!((dir - Vec2::new(0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn heading_to_xz_quarter_turn() {
        let heading = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let dir = heading_to_xz(heading);
        assert!((dir - Vec2::new(-1.0, 0.0)).length() < 1e-5);
    }
}
