//! Clock abstraction for the tick loop
//!
//! The session awaits `Clock::tick` alongside input, so a stopped clock
//! simply never completes.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// Periodic tick source with an adjustable period
#[async_trait]
pub trait Clock: Send {
    /// Wait for the next tick. Pends forever while stopped.
    async fn tick(&mut self);

    /// Current period
    fn period(&self) -> Duration;

    /// Change the period; the next tick is one new period away
    fn set_period(&mut self, period: Duration);

    /// Resume ticking, one period from now
    fn start(&mut self);

    /// Stop ticking until `start` is called
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Clock backed by `tokio::time::interval`
pub struct IntervalClock {
    interval: Interval,
    running: bool,
}

impl IntervalClock {
    /// Create a running clock whose first tick is one period away
    pub fn new(period: Duration) -> Self {
        Self {
            interval: Self::build(period),
            running: true,
        }
    }

    fn build(period: Duration) -> Interval {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    }
}

#[async_trait]
impl Clock for IntervalClock {
    async fn tick(&mut self) {
        if !self.running {
            std::future::pending::<()>().await;
        }
        self.interval.tick().await;
    }

    fn period(&self) -> Duration {
        self.interval.period()
    }

    fn set_period(&mut self, period: Duration) {
        if period == self.interval.period() {
            return;
        }
        debug!("Clock period set to {}ms", period.as_millis());
        self.interval = Self::build(period);
    }

    fn start(&mut self) {
        if self.running {
            return;
        }
        self.interval = Self::build(self.interval.period());
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
