use crate::api::config::SimConfig;

/// Frame pacing clock.
/// Turns host timestamps into a bounded delta and skips callbacks that arrive
/// faster than the target frame rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Minimum milliseconds between executed ticks.
    interval_ms: f64,
    /// Upper bound on the delta handed to entity updates, in seconds.
    max_delta: f32,
    /// Timestamp of the last executed tick (not the last callback).
    last_time: f64,
}

impl FrameClock {
    pub fn new(interval_ms: f64, max_delta: f32) -> Self {
        Self {
            interval_ms,
            max_delta,
            last_time: 0.0,
        }
    }

    /// Pacing taken from an already sanitized config.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.frame_interval_ms(), config.max_delta)
    }

    /// Feed a host timestamp (milliseconds). Returns the delta in seconds when
    /// this callback should run a tick, or `None` when it must be skipped.
    pub fn tick(&mut self, now_ms: f64) -> Option<f32> {
        let elapsed = now_ms - self.last_time;
        if elapsed < self.interval_ms {
            return None;
        }

        let delta = ((elapsed / 1000.0) as f32).min(self.max_delta);
        // Keep the remainder so long-run pacing does not drift.
        self.last_time = now_ms - (elapsed % self.interval_ms);
        Some(delta)
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }
}
