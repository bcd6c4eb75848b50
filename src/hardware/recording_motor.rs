//! Provides an in-memory [MotorController] that records the setpoints it receives.

use super::motor_controller::{MotorController, MotorKind, MotorSetup};

#[cfg(test)]
#[path = "recording_motor_tests.rs"]
mod recording_motor_tests;

/// A [MotorController] that keeps every setpoint it receives and reports telemetry that is
/// injected by the owner.
///
/// Used to exercise a module without hardware, e.g. in tests and benchmarks. No physics is
/// simulated: the measurements only change when they are set explicitly.
#[derive(Clone, Debug)]
pub struct RecordingMotorController {
    /// The kind of motor the controller pretends to drive.
    kind: MotorKind,

    /// The settings applied by the module, if any.
    setup: Option<MotorSetup>,

    /// The velocity setpoints in the order they were received.
    velocity_setpoints: Vec<f64>,

    /// The position setpoints in the order they were received.
    position_setpoints: Vec<f64>,

    /// The number of times the motor was stopped.
    stop_count: usize,

    /// The injected position.
    position: f64,

    /// The injected velocity.
    velocity: f64,

    /// The injected current.
    current: f64,
}

impl RecordingMotorController {
    /// Removes all recorded setpoints and stops.
    pub fn clear(&mut self) {
        self.velocity_setpoints.clear();
        self.position_setpoints.clear();
        self.stop_count = 0;
    }

    /// Returns the last position setpoint, if one was received.
    pub fn get_last_position_setpoint(&self) -> Option<f64> {
        self.position_setpoints.last().copied()
    }

    /// Returns the last velocity setpoint, if one was received.
    pub fn get_last_velocity_setpoint(&self) -> Option<f64> {
        self.velocity_setpoints.last().copied()
    }

    /// Creates a new [RecordingMotorController] with all measurements at zero.
    ///
    /// ## Parameters
    ///
    /// * 'kind' - The kind of motor the controller reports
    pub fn new(kind: MotorKind) -> Self {
        Self {
            kind,
            setup: None,
            velocity_setpoints: Vec::new(),
            position_setpoints: Vec::new(),
            stop_count: 0,
            position: 0.0,
            velocity: 0.0,
            current: 0.0,
        }
    }

    /// Returns all position setpoints in the order they were received.
    pub fn get_position_setpoints(&self) -> &[f64] {
        &self.position_setpoints
    }

    /// Sets the current that will be reported as measured.
    pub fn set_measured_current(&mut self, current: f64) {
        self.current = current;
    }

    /// Sets the position that will be reported as measured.
    pub fn set_measured_position(&mut self, position: f64) {
        self.position = position;
    }

    /// Sets the velocity that will be reported as measured.
    pub fn set_measured_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }

    /// Returns the settings that were applied to the controller, if any.
    pub fn get_setup(&self) -> Option<&MotorSetup> {
        self.setup.as_ref()
    }

    /// Returns the number of times the motor was stopped.
    pub fn get_stop_count(&self) -> usize {
        self.stop_count
    }

    /// Returns all velocity setpoints in the order they were received.
    pub fn get_velocity_setpoints(&self) -> &[f64] {
        &self.velocity_setpoints
    }
}

impl MotorController for RecordingMotorController {
    fn configure(&mut self, setup: &MotorSetup) {
        self.setup = Some(*setup);
    }

    fn get_kind(&self) -> MotorKind {
        self.kind
    }

    fn get_measured_current(&self) -> f64 {
        self.current
    }

    fn get_measured_position(&self) -> f64 {
        self.position
    }

    fn get_measured_velocity(&self) -> f64 {
        self.velocity
    }

    fn reset_position(&mut self) {
        self.position = 0.0;
    }

    fn set_position(&mut self, position: f64) {
        self.position_setpoints.push(position);
    }

    fn set_velocity(&mut self, velocity: f64) {
        self.velocity_setpoints.push(velocity);
    }

    fn stop(&mut self) {
        self.stop_count += 1;
    }
}
