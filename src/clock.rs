//! Defines the monotonic time sources that drive the auto-lock and traction control timers.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;

/// Defines a monotonic time source.
///
/// The returned time is measured from an arbitrary, fixed epoch. It never decreases and is not
/// affected by changes to the wall clock.
pub trait Clock {
    /// Returns the time that has passed since the epoch of the clock.
    fn now(&self) -> Duration;
}

/// A [Clock] that follows the monotonic system clock.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    /// The moment the clock was created. Used as the epoch.
    epoch: Instant,
}

impl SystemClock {
    /// Creates a new [SystemClock] with the epoch set to the current moment.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[cfg_attr(test, mutants::skip)] // Depends on the passage of real time
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A [Clock] that only moves when it is told to.
///
/// Clones share the same time, which allows a single clock to drive all modules of a chassis in
/// simulations and tests.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    /// The current time in nanoseconds since the epoch.
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Moves the clock forward by the given amount of time.
    ///
    /// ## Parameters
    ///
    /// * 'step' - The amount of time the clock should move forward
    pub fn advance(&self, step: Duration) {
        self.nanos
            .fetch_add(Self::to_nanos(step), Ordering::SeqCst);
    }

    /// Creates a new [ManualClock] that starts at the epoch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock to the given time, if that time is not before the current time.
    ///
    /// ## Parameters
    ///
    /// * 'time' - The time since the epoch
    pub fn set(&self, time: Duration) {
        self.nanos.fetch_max(Self::to_nanos(time), Ordering::SeqCst);
    }

    fn to_nanos(duration: Duration) -> u64 {
        u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}
