//! Defines the configuration of a swerve module.

use std::time::Duration;

use serde::Deserialize;

use crate::Error;

use super::{
    module_location::{GearRatio, ModuleLocation},
    traction_control::{MAX_SLIP_RATIO, MIN_SLIP_RATIO},
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// The default time a module has to be stationary before it locks.
pub const DEFAULT_AUTO_LOCK_TIME_IN_SECONDS: f64 = 3.0;

/// The default time a wheel may slip before the drive command is cut.
pub const DEFAULT_MAX_SLIPPING_TIME_IN_SECONDS: f64 = 0.6;

/// The default drive motor current limit.
pub const DEFAULT_DRIVE_CURRENT_LIMIT_IN_AMPS: f64 = 50.0;

/// The default allowed slip ratio.
pub const DEFAULT_SLIP_RATIO: f64 = 0.08;

/// The default period of the control loop.
pub const DEFAULT_LOOP_PERIOD_IN_SECONDS: f64 = 0.02;

fn default_auto_lock_time() -> f64 {
    DEFAULT_AUTO_LOCK_TIME_IN_SECONDS
}

fn default_max_slipping_time() -> f64 {
    DEFAULT_MAX_SLIPPING_TIME_IN_SECONDS
}

fn default_drive_current_limit() -> f64 {
    DEFAULT_DRIVE_CURRENT_LIMIT_IN_AMPS
}

fn default_slip_ratio() -> f64 {
    DEFAULT_SLIP_RATIO
}

fn default_loop_period() -> f64 {
    DEFAULT_LOOP_PERIOD_IN_SECONDS
}

/// Stores the configuration of a single swerve module.
///
/// The configuration can be deserialized with any serde format. Only the location, the gear
/// ratio and the chassis dimensions are required, all other values have defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ModuleConfig {
    /// The position of the module on the chassis.
    pub location: ModuleLocation,

    /// The drive gear reduction of the module.
    pub gear_ratio: GearRatio,

    /// The distance between the front and rear axles.
    ///
    /// Units: meters
    pub wheelbase_in_meters: f64,

    /// The distance between the left and right wheels.
    ///
    /// Units: meters
    pub track_width_in_meters: f64,

    /// The time the module has to be commanded to stand still before it locks.
    ///
    /// Units: seconds
    #[serde(default = "default_auto_lock_time")]
    pub auto_lock_time_in_seconds: f64,

    /// The time the wheel may slip before the drive command is forced to zero.
    ///
    /// Units: seconds
    #[serde(default = "default_max_slipping_time")]
    pub max_slipping_time_in_seconds: f64,

    /// The current limit handed to the drive motor controller.
    ///
    /// Units: amps
    #[serde(default = "default_drive_current_limit")]
    pub drive_current_limit_in_amps: f64,

    /// The fraction by which the commanded wheel speed may differ from the measured wheel
    /// speed before the wheel is considered to be slipping.
    #[serde(default = "default_slip_ratio")]
    pub slip_ratio: f64,

    /// The period with which the control loop runs.
    ///
    /// Units: seconds
    #[serde(default = "default_loop_period")]
    pub loop_period_in_seconds: f64,
}

impl ModuleConfig {
    /// Returns the auto-lock time.
    ///
    /// Only valid after [ModuleConfig::validate] succeeded.
    pub fn get_auto_lock_time(&self) -> Duration {
        Duration::from_secs_f64(self.auto_lock_time_in_seconds)
    }

    /// Returns the loop period.
    ///
    /// Only valid after [ModuleConfig::validate] succeeded.
    pub fn get_loop_period(&self) -> Duration {
        Duration::from_secs_f64(self.loop_period_in_seconds)
    }

    /// Returns the maximum slipping time.
    ///
    /// Only valid after [ModuleConfig::validate] succeeded.
    pub fn get_max_slipping_time(&self) -> Duration {
        Duration::from_secs_f64(self.max_slipping_time_in_seconds)
    }

    /// Creates a new [ModuleConfig] with default values for the timing, current limit and
    /// slip ratio.
    ///
    /// ## Parameters
    ///
    /// * 'location' - The position of the module on the chassis
    /// * 'gear_ratio' - The drive gear reduction
    /// * 'wheelbase_in_meters' - The distance between the front and rear axles
    /// * 'track_width_in_meters' - The distance between the left and right wheels
    pub fn new(
        location: ModuleLocation,
        gear_ratio: GearRatio,
        wheelbase_in_meters: f64,
        track_width_in_meters: f64,
    ) -> Self {
        Self {
            location,
            gear_ratio,
            wheelbase_in_meters,
            track_width_in_meters,
            auto_lock_time_in_seconds: DEFAULT_AUTO_LOCK_TIME_IN_SECONDS,
            max_slipping_time_in_seconds: DEFAULT_MAX_SLIPPING_TIME_IN_SECONDS,
            drive_current_limit_in_amps: DEFAULT_DRIVE_CURRENT_LIMIT_IN_AMPS,
            slip_ratio: DEFAULT_SLIP_RATIO,
            loop_period_in_seconds: DEFAULT_LOOP_PERIOD_IN_SECONDS,
        }
    }

    /// Checks that all values are within their allowed ranges.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidDimension] - Returned when the wheelbase or track width is not a finite
    ///   length larger than zero.
    /// * [Error::InvalidDuration] - Returned when the auto-lock time or the maximum slipping time
    ///   is negative or not finite, or when the loop period is not larger than zero.
    /// * [Error::InvalidCurrentLimit] - Returned when the current limit is not a finite current
    ///   larger than zero.
    /// * [Error::InvalidSlipRatio] - Returned when the slip ratio is outside the supported range.
    pub fn validate(&self) -> Result<(), Error> {
        let dimensions = [
            ("wheelbase", self.wheelbase_in_meters),
            ("track width", self.track_width_in_meters),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidDimension { name, value });
            }
        }

        let durations = [
            ("auto-lock time", self.auto_lock_time_in_seconds),
            ("maximum slipping time", self.max_slipping_time_in_seconds),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidDuration { name, value });
            }
        }

        if !self.loop_period_in_seconds.is_finite() || self.loop_period_in_seconds <= 0.0 {
            return Err(Error::InvalidDuration {
                name: "loop period",
                value: self.loop_period_in_seconds,
            });
        }

        if !self.drive_current_limit_in_amps.is_finite() || self.drive_current_limit_in_amps <= 0.0
        {
            return Err(Error::InvalidCurrentLimit {
                value: self.drive_current_limit_in_amps,
            });
        }

        if !(MIN_SLIP_RATIO..=MAX_SLIP_RATIO).contains(&self.slip_ratio) {
            return Err(Error::InvalidSlipRatio {
                value: self.slip_ratio,
            });
        }

        Ok(())
    }
}
