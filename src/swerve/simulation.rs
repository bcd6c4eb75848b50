//! Provides the stand-in for the wheel encoders when a module runs without hardware.

use std::time::Duration;

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod simulation_tests;

/// Stores the simulated encoder readings of a module.
///
/// The wheel is assumed to follow every command perfectly: it reaches the commanded speed and
/// heading within one control period. The readings are in the frame of the motor controllers,
/// i.e. the steer position includes the mounting offset of the module.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulatedWheel {
    /// The distance the wheel has driven.
    ///
    /// Units: meters
    drive_position: f64,

    /// The speed of the wheel.
    ///
    /// Units: meters per second
    drive_velocity: f64,

    /// The position of the steer motor.
    ///
    /// Units: radians
    steer_position: f64,
}

impl SimulatedWheel {
    /// Returns the distance the wheel has driven in meters.
    pub fn get_drive_position(&self) -> f64 {
        self.drive_position
    }

    /// Returns the speed of the wheel in meters per second.
    pub fn get_drive_velocity(&self) -> f64 {
        self.drive_velocity
    }

    /// Creates a new [SimulatedWheel] starting at the given readings and standing still.
    ///
    /// ## Parameters
    ///
    /// * 'drive_position' - The distance the wheel has already driven in meters
    /// * 'steer_position' - The position of the steer motor in radians
    pub fn new(drive_position: f64, steer_position: f64) -> Self {
        Self {
            drive_position,
            drive_velocity: 0.0,
            steer_position,
        }
    }

    /// Sets the driven distance back to zero.
    pub fn reset_drive_position(&mut self) {
        self.drive_position = 0.0;
    }

    /// Returns the position of the steer motor in radians.
    pub fn get_steer_position(&self) -> f64 {
        self.steer_position
    }

    /// Moves the wheel through one control period.
    ///
    /// ## Parameters
    ///
    /// * 'drive_velocity' - The commanded wheel speed in meters per second
    /// * 'steer_position' - The commanded steer motor position in radians
    /// * 'period' - The length of the control period
    pub fn step(&mut self, drive_velocity: f64, steer_position: f64, period: Duration) {
        self.drive_position += drive_velocity * period.as_secs_f64();
        self.drive_velocity = drive_velocity;
        self.steer_position = steer_position;
    }
}
