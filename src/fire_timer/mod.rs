use thiserror::Error;

/// Error returned when an interval cannot be used to schedule shots.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FireTimerError {
    /// A non-positive interval would never stop draining shots.
    #[error("fire interval must be positive, got {0}")]
    InvalidInterval(f32),
}

/// Cooldown accumulator for shot scheduling.
///
/// Holds the seconds remaining until the next permissible shot. The value may
/// go negative while elapsed time outruns the drain (time debt); the debt is
/// paid back as extra shots on the next drain, so sustained fire rates come
/// out exact on average instead of being rounded per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FireTimer {
    cooldown: f32,
}

impl FireTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds until the next shot is due. Negative means overdue.
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// Advance the timer by an elapsed slice of simulation time.
    pub fn advance(&mut self, delta_seconds: f32) {
        self.cooldown -= delta_seconds;
    }

    /// Count the shots whose scheduled time has arrived and re-arm the
    /// remainder. Each due shot pushes the accumulator forward by one
    /// interval, so fractional time carries over to the next tick.
    ///
    /// The loop is bounded by `|cooldown| / interval + 1` iterations. A
    /// non-positive interval is rejected rather than clamped; a clamp here
    /// would turn a configuration mistake into unbounded shot emission.
    pub fn drain_due_shots(&mut self, interval_seconds: f32) -> Result<u32, FireTimerError> {
        if interval_seconds <= 0.0 {
            return Err(FireTimerError::InvalidInterval(interval_seconds));
        }

        let mut count = 0;
        while self.cooldown <= 0.0 {
            count += 1;
            self.cooldown += interval_seconds;
        }
        Ok(count)
    }

    /// Drop any debt accumulated while idle, keeping leftover cooldown from a
    /// shot that already fired. The first shot of a fresh trigger pull lands
    /// immediately; spamming the trigger cannot beat the interval.
    pub fn rearm(&mut self) {
        self.cooldown = self.cooldown.max(0.0);
    }
}
