//! Defines the capability interface for the motor controllers that drive and steer a module.

use std::fmt::Display;

#[cfg(test)]
#[path = "motor_controller_tests.rs"]
mod motor_controller_tests;

/// Defines the kinds of motor that can be connected to a motor controller.
///
/// The set of supported motors is fixed. The only property of a motor that the module control
/// cares about is its free speed, which determines the top speed of a module.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MotorKind {
    /// A brushless NEO motor.
    Neo,

    /// A brushless NEO Vortex motor.
    NeoVortex,
}

impl MotorKind {
    /// Returns the speed of the motor shaft, in rotations per minute, when the motor spins
    /// without any load.
    pub fn get_free_speed_in_rpm(&self) -> f64 {
        match self {
            MotorKind::Neo => 5676.0,
            MotorKind::NeoVortex => 6784.0,
        }
    }

    /// Returns the speed of the motor shaft, in rotations per second, when the motor spins
    /// without any load.
    pub fn get_free_speed_in_rotations_per_second(&self) -> f64 {
        self.get_free_speed_in_rpm() / 60.0
    }
}

impl Display for MotorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotorKind::Neo => write!(f, "NEO"),
            MotorKind::NeoVortex => write!(f, "NEO Vortex"),
        }
    }
}

/// Stores the settings that a module applies to a motor controller when the module is created.
///
/// The conversion factors translate the native encoder units of the motor controller into
/// mechanism units, e.g. meters for a drive motor and radians for a steer motor. After the
/// settings have been applied all setpoints and measurements exchanged with the motor controller
/// are in mechanism units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotorSetup {
    /// The number of mechanism units per native position unit.
    position_conversion_factor: f64,

    /// The number of mechanism units per second per native velocity unit.
    velocity_conversion_factor: f64,

    /// The maximum current the motor controller should allow, if limited.
    current_limit_in_amps: Option<f64>,
}

impl MotorSetup {
    /// Returns the current limit in amps, if the current should be limited.
    pub fn get_current_limit_in_amps(&self) -> Option<f64> {
        self.current_limit_in_amps
    }

    /// Creates a new [MotorSetup] instance.
    ///
    /// ## Parameters
    ///
    /// * 'position_conversion_factor' - The number of mechanism units per native position unit
    /// * 'velocity_conversion_factor' - The number of mechanism units per second per native
    ///   velocity unit
    /// * 'current_limit_in_amps' - The maximum current the motor may draw, or [None] if the
    ///   current should not be limited
    pub fn new(
        position_conversion_factor: f64,
        velocity_conversion_factor: f64,
        current_limit_in_amps: Option<f64>,
    ) -> Self {
        Self {
            position_conversion_factor,
            velocity_conversion_factor,
            current_limit_in_amps,
        }
    }

    /// Returns the number of mechanism units per native position unit.
    pub fn get_position_conversion_factor(&self) -> f64 {
        self.position_conversion_factor
    }

    /// Returns the number of mechanism units per second per native velocity unit.
    pub fn get_velocity_conversion_factor(&self) -> f64 {
        self.velocity_conversion_factor
    }
}

/// Defines the interface for a motor controller that moves one axis of a swerve module.
///
/// The module treats a motor controller as a request / response port. Setpoints are fire and
/// forget and measurements return the last telemetry that the motor controller reported, which
/// may be one control cycle old. Faults are the responsibility of the motor controller and are
/// never reported through this interface.
///
/// The lifecycle of the motor controller, i.e. creating and shutting it down, belongs to the
/// caller.
pub trait MotorController {
    /// Applies the conversion factors and limits of the module to the motor controller.
    fn configure(&mut self, setup: &MotorSetup);

    /// Returns the kind of motor that is attached to the motor controller.
    fn get_kind(&self) -> MotorKind;

    /// Returns the last measured motor current in amps.
    fn get_measured_current(&self) -> f64;

    /// Returns the last measured position in mechanism units.
    fn get_measured_position(&self) -> f64;

    /// Returns the last measured velocity in mechanism units per second.
    fn get_measured_velocity(&self) -> f64;

    /// Resets the measured position to zero.
    fn reset_position(&mut self);

    /// Requests the motor to move to the given position in mechanism units.
    fn set_position(&mut self, position: f64);

    /// Requests the motor to run at the given velocity in mechanism units per second.
    fn set_velocity(&mut self, velocity: f64);

    /// Stops the motor.
    fn stop(&mut self);

    /// Pulls the most recent telemetry from the hardware.
    ///
    /// Measurements only change when this method is called, so that all reads made in one
    /// control cycle see the same values.
    fn update_inputs(&mut self) {}
}
