//! Defines the value types that describe the motion and the travelled path of a module.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::angles::{angular_difference, normalize_angle};

#[cfg(test)]
#[path = "module_state_tests.rs"]
mod module_state_tests;

/// Stores the velocity of a module: the signed wheel speed and the heading of the wheel.
///
/// A negative speed means the wheel drives backwards along its heading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModuleState {
    /// The wheel speed in meters per second.
    speed_in_meters_per_second: f64,

    /// The wheel heading in radians.
    angle_in_radians: f64,
}

impl ModuleState {
    /// Returns the wheel heading in radians.
    pub fn get_angle_in_radians(&self) -> f64 {
        self.angle_in_radians
    }

    /// Creates a new [ModuleState] instance.
    ///
    /// ## Parameters
    ///
    /// * 'speed_in_meters_per_second' - The signed wheel speed
    /// * 'angle_in_radians' - The wheel heading. Any value is accepted, the heading is periodic
    pub fn new(speed_in_meters_per_second: f64, angle_in_radians: f64) -> Self {
        Self {
            speed_in_meters_per_second,
            angle_in_radians,
        }
    }

    /// Returns the equivalent state that requires the least steer travel from the current
    /// heading.
    ///
    /// If the requested heading is more than a quarter turn away from the current heading the
    /// heading is flipped by half a turn and the speed is reversed. The returned heading is
    /// normalized to the [-PI, PI] range.
    ///
    /// ## Parameters
    ///
    /// * 'current_angle_in_radians' - The current heading of the wheel
    ///
    /// ## Example
    ///
    /// ```
    /// use max_swerve_module::swerve::module_state::ModuleState;
    ///
    /// let state = ModuleState::new(2.0, core::f64::consts::PI);
    /// let optimized = state.optimize(0.0);
    ///
    /// assert_eq!(-2.0, optimized.get_speed_in_meters_per_second());
    /// assert_eq!(0.0, optimized.get_angle_in_radians());
    /// ```
    pub fn optimize(&self, current_angle_in_radians: f64) -> Self {
        let delta = angular_difference(current_angle_in_radians, self.angle_in_radians);
        if delta.abs() > FRAC_PI_2 {
            Self::new(
                -self.speed_in_meters_per_second,
                normalize_angle(self.angle_in_radians + PI),
            )
        } else {
            Self::new(
                self.speed_in_meters_per_second,
                normalize_angle(self.angle_in_radians),
            )
        }
    }

    /// Returns the signed wheel speed in meters per second.
    pub fn get_speed_in_meters_per_second(&self) -> f64 {
        self.speed_in_meters_per_second
    }
}

/// Stores the travelled path of a module: the cumulative distance driven by the wheel and the
/// current heading of the wheel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModulePosition {
    /// The signed distance the wheel has driven in meters.
    distance_in_meters: f64,

    /// The wheel heading in radians.
    angle_in_radians: f64,
}

impl ModulePosition {
    /// Returns the wheel heading in radians.
    pub fn get_angle_in_radians(&self) -> f64 {
        self.angle_in_radians
    }

    /// Returns the signed distance the wheel has driven in meters.
    pub fn get_distance_in_meters(&self) -> f64 {
        self.distance_in_meters
    }

    /// Creates a new [ModulePosition] instance.
    ///
    /// ## Parameters
    ///
    /// * 'distance_in_meters' - The signed, cumulative distance driven by the wheel
    /// * 'angle_in_radians' - The current heading of the wheel
    pub fn new(distance_in_meters: f64, angle_in_radians: f64) -> Self {
        Self {
            distance_in_meters,
            angle_in_radians,
        }
    }
}
