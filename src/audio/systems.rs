use bevy::prelude::*;

use crate::audio::plugin::SoundLimiter;

/// Return spent playback slots on the limiter's refill cadence.
pub fn refill_sound_slots(time: Res<Time>, mut limiter: ResMut<SoundLimiter>) {
    limiter.tick(time.delta());
}
