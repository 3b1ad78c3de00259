use bevy::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::audio::systems::refill_sound_slots;

/// Channel for weapon fire reports, kept apart from any music the host game
/// plays.
#[derive(Resource)]
pub struct WeaponSoundChannel;

/// Cap on how many sounds may start per refill window. Tuned-up fire rates
/// reach well past what stacked playback tolerates.
#[derive(Resource)]
pub struct SoundLimiter {
    slots: u32,
    max_slots: u32,
    refill: Timer,
}

impl Default for SoundLimiter {
    fn default() -> Self {
        Self {
            slots: 8,
            max_slots: 8,
            refill: Timer::from_seconds(0.25, TimerMode::Repeating),
        }
    }
}

impl SoundLimiter {
    /// Take a playback slot if one is free.
    pub fn try_acquire(&mut self) -> bool {
        if self.slots == 0 {
            return false;
        }
        self.slots -= 1;
        true
    }

    pub fn available(&self) -> u32 {
        self.slots
    }

    pub(crate) fn tick(&mut self, delta: std::time::Duration) {
        self.refill.tick(delta);
        if self.refill.just_finished() {
            self.slots = self.max_slots;
        }
    }
}

/// Play a sound through the channel unless the limiter is out of slots.
pub fn play_limited_sound(
    channel: &AudioChannel<WeaponSoundChannel>,
    asset_server: &AssetServer,
    path: &str,
    limiter: &mut SoundLimiter,
) {
    if limiter.try_acquire() {
        channel.play(asset_server.load(path.to_owned()));
    }
}

pub fn plugin(app: &mut App) {
    app.add_plugins(AudioPlugin)
        .add_audio_channel::<WeaponSoundChannel>()
        .init_resource::<SoundLimiter>()
        .add_systems(Update, refill_sound_slots);
}
