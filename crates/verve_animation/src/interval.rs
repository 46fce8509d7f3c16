//! Fixed-period interval timer
//!
//! Accumulates frame time and reports how many whole periods have elapsed.
//! If the host stalls for longer than one period, the missed firings are
//! reported on the next tick (catch-up), so cycle counts stay exact.

use std::time::Duration;

/// A recurring fixed-period timer
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    /// Create an interval with the given period
    ///
    /// # Panics
    ///
    /// Panics if the period is zero; a zero-period interval would fire an
    /// unbounded number of times per tick.
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "interval period must be non-zero");
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance by `dt`, returning the number of periods that completed
    pub fn tick(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;

        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    /// Restart the current period from zero
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
