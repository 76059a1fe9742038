//! Tick-interval schedule driven by score

use std::time::Duration;

use crate::config::GameConfig;

/// Shrinks the tick interval as the snake grows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedSchedule {
    pub initial: Duration,
    pub min: Duration,
    pub step: Duration,
    /// Speed up each time the body length hits a multiple of this
    pub every: usize,
}

impl SpeedSchedule {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            initial: config.initial_tick(),
            min: config.min_tick(),
            step: config.speedup_step(),
            every: config.speedup_every.max(1),
        }
    }

    /// Interval to use after the body grew to `body_len`
    pub fn after_growth(&self, current: Duration, body_len: usize) -> Duration {
        if body_len == 0 || body_len % self.every != 0 {
            return current;
        }

        current.saturating_sub(self.step).max(self.min)
    }
}

impl Default for SpeedSchedule {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
