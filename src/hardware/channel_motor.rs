//! Provides a [MotorController] that forwards commands to, and receives telemetry from, a motor
//! controller driver running on another thread.

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use super::motor_controller::{MotorController, MotorKind, MotorSetup};

#[cfg(test)]
#[path = "channel_motor_tests.rs"]
mod channel_motor_tests;

/// Defines the commands that are sent to the motor controller driver.
///
/// All values are in the native units of the motor controller, i.e. rotations for positions
/// and rotations per minute for velocities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotorCommand {
    /// Limit the motor current to the given value in amps.
    CurrentLimit(f64),

    /// Run a closed loop position control to the given position.
    Position(f64),

    /// Stop the motor.
    Stop,

    /// Run a closed loop velocity control at the given velocity.
    Velocity(f64),
}

/// Stores a single telemetry sample as reported by the motor controller driver.
///
/// Positions are in rotations, velocities in rotations per minute and currents in amps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotorTelemetry {
    /// The encoder position.
    position: f64,

    /// The encoder velocity.
    velocity: f64,

    /// The motor current.
    current: f64,
}

impl MotorTelemetry {
    /// Returns the motor current in amps.
    pub fn get_current(&self) -> f64 {
        self.current
    }

    /// Creates a new [MotorTelemetry] sample.
    ///
    /// ## Parameters
    ///
    /// * 'position' - The encoder position in rotations
    /// * 'velocity' - The encoder velocity in rotations per minute
    /// * 'current' - The motor current in amps
    pub fn new(position: f64, velocity: f64, current: f64) -> Self {
        Self {
            position,
            velocity,
            current,
        }
    }

    /// Returns the encoder position in rotations.
    pub fn get_position(&self) -> f64 {
        self.position
    }

    /// Returns the encoder velocity in rotations per minute.
    pub fn get_velocity(&self) -> f64 {
        self.velocity
    }
}

/// A [MotorController] handle for a motor controller that is serviced by a driver on another
/// thread, e.g. a CAN bus driver.
///
/// Commands are converted to native units and sent over a [Sender]. Telemetry samples arrive
/// over a [Receiver] and are only picked up when [MotorController::update_inputs] is called.
/// If the driver goes away the handle keeps reporting the last telemetry it received.
pub struct ChannelMotorController {
    /// The kind of motor that is attached to the motor controller.
    kind: MotorKind,

    /// The channel used to send commands to the driver.
    command_sender: Sender<MotorCommand>,

    /// The channel on which the driver reports telemetry.
    telemetry_receiver: Receiver<MotorTelemetry>,

    /// The conversion factors and limits of the module.
    setup: MotorSetup,

    /// The most recent telemetry sample in native units.
    latest: MotorTelemetry,

    /// The native encoder position that is reported as zero.
    position_offset: f64,

    /// A flag indicating that the driver stopped listening for commands.
    disconnected: bool,
}

impl ChannelMotorController {
    /// Creates a new [ChannelMotorController] instance.
    ///
    /// Until [MotorController::configure] is called the conversion factors are 1.0, i.e. the
    /// handle works in native units.
    ///
    /// ## Parameters
    ///
    /// * 'kind' - The kind of motor attached to the motor controller
    /// * 'command_sender' - The channel on which commands for the driver are sent
    /// * 'telemetry_receiver' - The channel on which the driver reports its telemetry
    pub fn new(
        kind: MotorKind,
        command_sender: Sender<MotorCommand>,
        telemetry_receiver: Receiver<MotorTelemetry>,
    ) -> Self {
        Self {
            kind,
            command_sender,
            telemetry_receiver,
            setup: MotorSetup::new(1.0, 1.0, None),
            latest: MotorTelemetry::default(),
            position_offset: 0.0,
            disconnected: false,
        }
    }

    fn send(&mut self, command: MotorCommand) {
        match self.command_sender.send(command) {
            Ok(_) => {
                self.disconnected = false;
            }
            Err(_) => {
                // Only report the transition. The control loop keeps running at full rate.
                if !self.disconnected {
                    warn!(
                        kind = %self.kind,
                        "Motor controller driver disconnected. Dropping commands"
                    );
                }
                self.disconnected = true;
            }
        }
    }
}

impl MotorController for ChannelMotorController {
    fn configure(&mut self, setup: &MotorSetup) {
        self.setup = *setup;
        if let Some(limit) = setup.get_current_limit_in_amps() {
            self.send(MotorCommand::CurrentLimit(limit));
        }

        debug!(
            kind = %self.kind,
            position_factor = setup.get_position_conversion_factor(),
            velocity_factor = setup.get_velocity_conversion_factor(),
            "Configured motor controller"
        );
    }

    fn get_kind(&self) -> MotorKind {
        self.kind
    }

    fn get_measured_current(&self) -> f64 {
        self.latest.get_current()
    }

    fn get_measured_position(&self) -> f64 {
        (self.latest.get_position() - self.position_offset) * self.setup.get_position_conversion_factor()
    }

    fn get_measured_velocity(&self) -> f64 {
        self.latest.get_velocity() * self.setup.get_velocity_conversion_factor()
    }

    fn reset_position(&mut self) {
        // The encoder count on the hardware is left alone.
        self.position_offset = self.latest.get_position();
    }

    fn set_position(&mut self, position: f64) {
        let native = position / self.setup.get_position_conversion_factor();
        self.send(MotorCommand::Position(native));
    }

    fn set_velocity(&mut self, velocity: f64) {
        let native = velocity / self.setup.get_velocity_conversion_factor();
        self.send(MotorCommand::Velocity(native));
    }

    fn stop(&mut self) {
        self.send(MotorCommand::Stop);
    }

    fn update_inputs(&mut self) {
        if let Some(sample) = self.telemetry_receiver.try_iter().last() {
            self.latest = sample;
        }
    }
}
