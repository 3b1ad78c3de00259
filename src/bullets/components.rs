use bevy::prelude::*;

use crate::movement::components::heading_to_xz;

/// A projectile in flight on the ground plane. What happens to it beyond
/// flying and expiring (collision, damage) belongs to the host game.
#[derive(Component, Clone, Debug)]
pub struct Bullet {
    pub direction: Vec2,
    pub speed: f32,
    pub lifetime: Timer,
}

impl Bullet {
    /// Flight speed in world units per second.
    pub const DEFAULT_SPEED: f32 = 24.0;
    /// Seconds a bullet lives before it is reclaimed.
    pub const DEFAULT_LIFETIME: f32 = 3.0;

    /// Build a bullet flying along a spawn heading.
    pub fn from_heading(heading: Quat) -> Self {
        Self {
            direction: heading_to_xz(heading),
            speed: Self::DEFAULT_SPEED,
            lifetime: Timer::from_seconds(Self::DEFAULT_LIFETIME, TimerMode::Once),
        }
    }
}
