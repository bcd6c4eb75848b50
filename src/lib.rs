#![warn(missing_docs)]

//! Control core for a single swerve drive module (one steerable and drivable wheel).
//!
//! Provides the per-module control algorithm of a swerve (4 wheel steering and 4 wheel drive)
//! robot: steer angle optimization, traction control, auto-lock and the simulated odometry
//! that is used when no physical sensors are present. The physical motor controllers are
//! reached through the narrow [hardware::motor_controller::MotorController] capability.

use thiserror::Error;

/// Provides angle helpers for periodic angular values.
pub mod angles;

/// Provides the monotonic time sources used by the module timers.
pub mod clock;

/// Provides the actuator capability and its implementations.
pub mod hardware;

/// Provides the swerve module controller and its value types.
pub mod swerve;

/// Defines the different errors for the swerve module crate.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Returned when a chassis dimension is not a finite, strictly positive length.
    #[error("The {name} must be a finite length larger than zero. Got {value} m")]
    InvalidDimension {
        /// The name of the dimension
        name: &'static str,
        /// The provided value
        value: f64,
    },

    /// Returned when a configured time span is negative or not finite.
    #[error("The {name} must be a finite, non-negative time span. Got {value} s")]
    InvalidDuration {
        /// The name of the time span
        name: &'static str,
        /// The provided value
        value: f64,
    },

    /// Returned when the slip ratio for the traction control is out of range.
    #[error("The slip ratio must be between {min} and {max}. Got {value}", min = swerve::traction_control::MIN_SLIP_RATIO, max = swerve::traction_control::MAX_SLIP_RATIO)]
    InvalidSlipRatio {
        /// The provided value
        value: f64,
    },

    /// Returned when the drive current limit is not a finite, strictly positive current.
    #[error("The drive current limit must be a finite current larger than zero. Got {value} A")]
    InvalidCurrentLimit {
        /// The provided value
        value: f64,
    },
}
