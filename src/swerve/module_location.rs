//! Defines the fixed, physical properties of a module: where it is mounted and how it is geared.

use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt::Display,
};

use nalgebra::Vector2;
use serde::Deserialize;

#[cfg(test)]
#[path = "module_location_tests.rs"]
mod module_location_tests;

/// The diameter of the drive wheel in meters (3 inch).
pub const WHEEL_DIAMETER_IN_METERS: f64 = 0.0762;

/// The circumference of the drive wheel in meters.
pub const WHEEL_CIRCUMFERENCE_IN_METERS: f64 = WHEEL_DIAMETER_IN_METERS * PI;

/// The fraction of the theoretical free speed that the drive train achieves.
pub const DRIVE_EFFICIENCY: f64 = 0.90;

/// Defines the position of a module on the chassis.
///
/// The chassis frame has the x-axis pointing forward and the y-axis pointing to the left.
/// Each location also carries the rotation with which the absolute steer encoder is mounted
/// relative to the chassis.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum ModuleLocation {
    /// The module at the front on the left side of the chassis.
    LeftFront,

    /// The module at the front on the right side of the chassis.
    RightFront,

    /// The module at the rear on the left side of the chassis.
    LeftRear,

    /// The module at the rear on the right side of the chassis.
    RightRear,
}

impl ModuleLocation {
    /// Returns all locations, front to back and left to right.
    pub fn all() -> [ModuleLocation; 4] {
        [
            ModuleLocation::LeftFront,
            ModuleLocation::RightFront,
            ModuleLocation::LeftRear,
            ModuleLocation::RightRear,
        ]
    }

    /// Returns the coordinate of the module relative to the center of the chassis.
    ///
    /// ## Parameters
    ///
    /// * 'wheelbase_in_meters' - The distance between the front and rear axles
    /// * 'track_width_in_meters' - The distance between the left and right wheels
    pub fn get_coordinate(&self, wheelbase_in_meters: f64, track_width_in_meters: f64) -> Vector2<f64> {
        let (sign_x, sign_y) = self.get_signs();
        Vector2::new(
            sign_x * wheelbase_in_meters / 2.0,
            sign_y * track_width_in_meters / 2.0,
        )
    }

    /// Returns the rotation, in radians, of the absolute steer encoder relative to the chassis.
    ///
    /// An encoder angle is translated to the chassis frame by subtracting the offset.
    pub fn get_offset_in_radians(&self) -> f64 {
        match self {
            ModuleLocation::LeftFront => -FRAC_PI_2,
            ModuleLocation::RightFront => 0.0,
            ModuleLocation::LeftRear => PI,
            ModuleLocation::RightRear => FRAC_PI_2,
        }
    }

    /// Returns the signs of the x and y coordinates of the module.
    pub fn get_signs(&self) -> (f64, f64) {
        match self {
            ModuleLocation::LeftFront => (1.0, 1.0),
            ModuleLocation::RightFront => (1.0, -1.0),
            ModuleLocation::LeftRear => (-1.0, 1.0),
            ModuleLocation::RightRear => (-1.0, -1.0),
        }
    }
}

impl Display for ModuleLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModuleLocation::LeftFront => "LeftFront",
            ModuleLocation::RightFront => "RightFront",
            ModuleLocation::LeftRear => "LeftRear",
            ModuleLocation::RightRear => "RightRear",
        };

        write!(f, "{}", name)
    }
}

/// Defines the available drive gear reductions.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
pub enum GearRatio {
    /// The low speed reduction (12 tooth pinion).
    L1,

    /// The medium speed reduction (13 tooth pinion).
    L2,

    /// The high speed reduction (14 tooth pinion).
    L3,
}

impl GearRatio {
    /// Returns the number of motor rotations per wheel rotation.
    pub fn get_reduction(&self) -> f64 {
        match self {
            GearRatio::L1 => 5.50,
            GearRatio::L2 => 5.08,
            GearRatio::L3 => 4.71,
        }
    }

    /// Returns the distance in meters that the wheel travels per motor rotation.
    pub fn get_meters_per_motor_rotation(&self) -> f64 {
        WHEEL_CIRCUMFERENCE_IN_METERS / self.get_reduction()
    }
}

impl Display for GearRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({:.2}:1)", self, self.get_reduction())
    }
}
