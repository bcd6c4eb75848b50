//! Provides the timer that decides when a stationary module locks its wheel.

use std::time::Duration;

use tracing::debug;

#[cfg(test)]
#[path = "auto_lock_tests.rs"]
mod auto_lock_tests;

/// Speeds below this value are considered to be a request to stand still.
///
/// Units: meters per second
pub const STATIONARY_SPEED_THRESHOLD: f64 = 5e-3;

/// Defines how a module should treat a drive request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LockStage {
    /// The request should be driven as is.
    Driving,

    /// The module is asked to stand still. The wheel should keep its previous heading.
    Holding,

    /// The module has been standing still long enough. The wheel should turn to a diagonal.
    Locked,
}

/// Tracks how long a module has been asked to stand still.
#[derive(Clone, Debug)]
pub struct AutoLock {
    /// The time the module has to stand still before it locks.
    lock_time: Duration,

    /// A flag indicating whether the module is allowed to lock.
    enabled: bool,

    /// The last time at which the module was asked to move.
    stationary_since: Duration,

    /// The stage decided during the last update.
    stage: LockStage,

    /// A flag indicating that the lock was requested explicitly. It holds until the module is
    /// asked to move, regardless of the timer and the enabled state.
    requested: bool,
}

impl AutoLock {
    /// Stops the module from locking.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Allows the module to lock.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Returns a value indicating whether the module is allowed to lock.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns a value indicating whether the last update locked the module.
    pub fn is_locked(&self) -> bool {
        self.stage == LockStage::Locked
    }

    /// Locks the module straight away. The lock holds until the module is asked to move.
    pub fn lock(&mut self) {
        if self.stage != LockStage::Locked {
            debug!("Lock requested");
        }

        self.requested = true;
        self.stage = LockStage::Locked;
    }

    /// Returns the time the module has to stand still before it locks.
    pub fn get_lock_time(&self) -> Duration {
        self.lock_time
    }

    /// Creates a new, enabled [AutoLock] that considers the module stationary from `now`.
    ///
    /// ## Parameters
    ///
    /// * 'lock_time' - The time the module has to stand still before it locks
    /// * 'now' - The current time of the control loop
    pub fn new(lock_time: Duration, now: Duration) -> Self {
        Self {
            lock_time,
            enabled: true,
            stationary_since: now,
            stage: LockStage::Driving,
            requested: false,
        }
    }

    /// Returns the time the module has been asked to stand still.
    pub fn get_stationary_time(&self, now: Duration) -> Duration {
        now.saturating_sub(self.stationary_since)
    }

    /// Flips between allowing and not allowing the module to lock.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    /// Records the requested speed and returns how the request should be treated.
    ///
    /// ## Parameters
    ///
    /// * 'speed' - The requested wheel speed in meters per second
    /// * 'now' - The current time of the control loop
    pub fn update(&mut self, speed: f64, now: Duration) -> LockStage {
        let stage = if speed.abs() > STATIONARY_SPEED_THRESHOLD {
            self.stationary_since = now;
            self.requested = false;
            LockStage::Driving
        } else if self.requested {
            LockStage::Locked
        } else if !self.enabled {
            LockStage::Driving
        } else if self.get_stationary_time(now) >= self.lock_time {
            LockStage::Locked
        } else {
            LockStage::Holding
        };

        if stage != self.stage && (stage == LockStage::Locked || self.stage == LockStage::Locked)
        {
            debug!(
                locked = stage == LockStage::Locked,
                stationary_time = ?self.get_stationary_time(now),
                "Auto-lock changed"
            );
        }

        self.stage = stage;
        stage
    }
}
