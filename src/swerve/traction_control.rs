//! Provides the limiting of the drive command when the wheel slips.
//!
//! The only information about the wheel is the speed measured by the drive motor encoder. The
//! wheel is considered to be slipping when the requested wheel speed and the measured wheel
//! speed diverge by more than the slip ratio. While slipping the requested speed is limited to a
//! band around the measured speed, which limits how fast the wheel is allowed to spin up or down.
//! If the wheel keeps slipping for longer than the maximum slipping time the drive command is
//! cut to zero until the wheel has settled to the cut command. After that the limiting starts
//! again from the measured speed.

use std::time::Duration;

use tracing::{debug, warn};

#[cfg(test)]
#[path = "traction_control_tests.rs"]
mod traction_control_tests;

/// The smallest supported slip ratio.
pub const MIN_SLIP_RATIO: f64 = 0.01;

/// The largest supported slip ratio.
pub const MAX_SLIP_RATIO: f64 = 0.40;

/// The lowest wheel speed used as the reference for the slip ratio.
///
/// At low wheel speeds any change in speed is a large ratio. Using a floor keeps a stationary
/// wheel from being detected as slipping as soon as it is asked to move.
///
/// Units: meters per second
pub const MIN_REFERENCE_SPEED: f64 = 1.0;

/// Limits the drive command of a module when its wheel slips.
#[derive(Clone, Debug)]
pub struct TractionControl {
    /// The allowed fraction of divergence between the requested and measured wheel speed.
    slip_ratio: f64,

    /// The time the wheel may slip before the drive command is cut.
    max_slipping_time: Duration,

    /// A flag indicating whether the limiting is active.
    enabled: bool,

    /// The time at which the current slip started, if the wheel is slipping.
    slipping_since: Option<Duration>,

    /// A flag indicating that the drive command is cut because the wheel slipped for too long.
    cut_off: bool,

    /// The wheel speed returned by the last update.
    last_output: f64,
}

impl TractionControl {
    /// Stops limiting the drive command and clears the slip state.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.reset();
    }

    /// Starts limiting the drive command.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Returns a value indicating whether the drive command is cut because the wheel slipped
    /// for longer than the maximum slipping time.
    pub fn is_cut_off(&self) -> bool {
        self.cut_off
    }

    /// Returns a value indicating whether the drive command is being limited.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns a value indicating whether the wheel was slipping during the last update.
    pub fn is_slipping(&self) -> bool {
        self.slipping_since.is_some()
    }

    /// Returns the wheel speed that should be commanded.
    ///
    /// ## Parameters
    ///
    /// * 'requested' - The requested wheel speed in meters per second
    /// * 'measured' - The measured wheel speed in meters per second
    /// * 'now' - The current time of the control loop
    pub fn limit(&mut self, requested: f64, measured: f64, now: Duration) -> f64 {
        if !self.enabled {
            return requested;
        }

        let band = self.slip_ratio * measured.abs().max(MIN_REFERENCE_SPEED);
        if self.cut_off {
            // The wheel follows the cut command, not the request
            if (measured - self.last_output).abs() > band {
                return self.last_output;
            }

            debug!(measured, "Wheel speed settled after the drive cut");
            self.reset();
        }

        if (requested - measured).abs() <= band {
            if self.is_slipping() {
                debug!(requested, measured, "Wheel speed reconverged");
            }

            self.reset();
            self.last_output = requested;
            return requested;
        }

        let since = *self.slipping_since.get_or_insert(now);
        if now.saturating_sub(since) > self.max_slipping_time {
            warn!(
                requested,
                measured,
                slipping_time = ?now.saturating_sub(since),
                "Wheel slipped for too long. Cutting the drive command"
            );

            self.cut_off = true;
            self.last_output = 0.0;
            return 0.0;
        }

        // clamp() panics on NaN
        self.last_output = requested.max(measured - band).min(measured + band);
        self.last_output
    }

    /// Creates a new, enabled [TractionControl] instance.
    ///
    /// ## Parameters
    ///
    /// * 'slip_ratio' - The allowed fraction of divergence between the requested and measured
    ///   wheel speed
    /// * 'max_slipping_time' - The time the wheel may slip before the drive command is cut
    pub fn new(slip_ratio: f64, max_slipping_time: Duration) -> Self {
        Self {
            slip_ratio,
            max_slipping_time,
            enabled: true,
            slipping_since: None,
            cut_off: false,
            last_output: 0.0,
        }
    }

    /// Returns the allowed slip ratio.
    pub fn get_slip_ratio(&self) -> f64 {
        self.slip_ratio
    }

    /// Flips between limiting and not limiting the drive command.
    pub fn toggle(&mut self) {
        if self.enabled {
            self.disable();
        } else {
            self.enable();
        }
    }

    fn reset(&mut self) {
        self.slipping_since = None;
        self.cut_off = false;
    }
}
