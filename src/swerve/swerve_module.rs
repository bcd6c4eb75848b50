//! Provides the controller for a single swerve module.
//!
//! The controller turns the desired state of a module into setpoints for the drive and steer
//! motor controllers. Each call to [SwerveModule::set] runs the same pipeline:
//!
//! 1. Read the current steer angle.
//! 2. Optimize the desired state so that the wheel never steers more than a quarter turn.
//! 3. Limit the wheel speed if the wheel slips (traction control).
//! 4. Hold the heading, or lock the wheel on a diagonal, if the module is asked to stand still
//!    (auto-lock).
//! 5. Translate the heading into the frame of the steer encoder and send both setpoints.
//!
//! All control math happens in the chassis frame. The mounting offset of the module is only
//! applied when sending setpoints and when reading the steer encoder.

use std::{f64::consts::TAU, time::Duration};

use nalgebra::Vector2;
use tracing::{debug, info, trace};

use crate::{
    angles::{nearest_diagonal, normalize_angle},
    clock::{Clock, SystemClock},
    hardware::motor_controller::{MotorController, MotorSetup},
    Error,
};

use super::{
    auto_lock::{AutoLock, LockStage},
    config::ModuleConfig,
    module_location::{GearRatio, ModuleLocation, DRIVE_EFFICIENCY},
    module_state::{ModulePosition, ModuleState},
    simulation::SimulatedWheel,
    traction_control::TractionControl,
};

#[cfg(test)]
#[path = "swerve_module_tests.rs"]
mod swerve_module_tests;

/// Stores the motor controllers of a module.
pub struct ModuleHardware<M: MotorController> {
    /// The motor controller that drives the wheel.
    drive_motor: M,

    /// The motor controller that steers the wheel.
    rotate_motor: M,
}

impl<M: MotorController> ModuleHardware<M> {
    /// Returns the motor controller that drives the wheel.
    pub fn get_drive_motor(&self) -> &M {
        &self.drive_motor
    }

    /// Returns the motor controller that drives the wheel.
    pub fn get_drive_motor_mut(&mut self) -> &mut M {
        &mut self.drive_motor
    }

    /// Creates a new [ModuleHardware] instance.
    ///
    /// ## Parameters
    ///
    /// * 'drive_motor' - The motor controller that drives the wheel
    /// * 'rotate_motor' - The motor controller that steers the wheel. Its encoder is expected
    ///   to be an absolute encoder
    pub fn new(drive_motor: M, rotate_motor: M) -> Self {
        Self {
            drive_motor,
            rotate_motor,
        }
    }

    /// Returns the motor controller that steers the wheel.
    pub fn get_rotate_motor(&self) -> &M {
        &self.rotate_motor
    }

    /// Returns the motor controller that steers the wheel.
    pub fn get_rotate_motor_mut(&mut self) -> &mut M {
        &mut self.rotate_motor
    }
}

/// Stores the encoder readings of a module in the frame of the motor controllers.
struct WheelFeedback {
    /// The driven distance in meters.
    drive_position: f64,

    /// The wheel speed in meters per second.
    drive_velocity: f64,

    /// The steer encoder position in radians, including the mounting offset.
    steer_position: f64,
}

/// Controls a single swerve module: one wheel that can be driven and steered independently.
///
/// The controller is driven synchronously by the control loop. It is not shared between
/// threads and never blocks.
pub struct SwerveModule<M: MotorController, C: Clock = SystemClock> {
    /// The motor controllers of the module.
    hardware: ModuleHardware<M>,

    /// The time source for the auto-lock and traction control timers.
    clock: C,

    /// The position of the module on the chassis.
    location: ModuleLocation,

    /// The drive gear reduction.
    gear_ratio: GearRatio,

    /// The distance between the front and rear axles in meters.
    wheelbase_in_meters: f64,

    /// The distance between the left and right wheels in meters.
    track_width_in_meters: f64,

    /// The period with which the control loop runs.
    loop_period: Duration,

    /// Limits the drive command when the wheel slips.
    traction_control: TractionControl,

    /// Tracks how long the module has been asked to stand still.
    auto_lock: AutoLock,

    /// The last state sent to the motor controllers, in the chassis frame.
    commanded: ModuleState,

    /// The simulated encoders. Present once the module runs in simulation.
    simulation: Option<SimulatedWheel>,
}

impl<M: MotorController, C: Clock> SwerveModule<M, C> {
    /// Sends the state to the motor controllers and stores it as the commanded state.
    fn apply(&mut self, command: ModuleState) {
        let steer_position = self.to_motor_angle(command.get_angle_in_radians());

        self.hardware.rotate_motor.set_position(steer_position);
        self.hardware
            .drive_motor
            .set_velocity(command.get_speed_in_meters_per_second());

        self.commanded = command;
    }

    /// Returns the last state sent to the motor controllers, in the chassis frame.
    pub fn get_commanded_state(&self) -> ModuleState {
        self.commanded
    }

    /// Stops the module from locking its wheel when it stands still.
    pub fn disable_auto_lock(&mut self) {
        self.auto_lock.disable();
        debug!(location = %self.location, "Auto-lock disabled");
    }

    /// Stops limiting the drive command when the wheel slips.
    pub fn disable_traction_control(&mut self) {
        self.traction_control.disable();
        debug!(location = %self.location, "Traction control disabled");
    }

    /// Returns the distance in meters the wheel travels per drive motor rotation.
    pub fn get_drive_conversion_factor(&self) -> f64 {
        self.gear_ratio.get_meters_per_motor_rotation()
    }

    /// Allows the module to lock its wheel when it stands still.
    pub fn enable_auto_lock(&mut self) {
        self.auto_lock.enable();
        debug!(location = %self.location, "Auto-lock enabled");
    }

    /// Starts limiting the drive command when the wheel slips.
    pub fn enable_traction_control(&mut self) {
        self.traction_control.enable();
        debug!(location = %self.location, "Traction control enabled");
    }

    /// Returns the current encoder readings, either from the hardware or from the simulation.
    fn feedback(&self) -> WheelFeedback {
        match &self.simulation {
            Some(wheel) => WheelFeedback {
                drive_position: wheel.get_drive_position(),
                drive_velocity: wheel.get_drive_velocity(),
                steer_position: wheel.get_steer_position(),
            },
            None => WheelFeedback {
                drive_position: self.hardware.drive_motor.get_measured_position(),
                drive_velocity: self.hardware.drive_motor.get_measured_velocity(),
                steer_position: self.hardware.rotate_motor.get_measured_position(),
            },
        }
    }

    /// Returns the gear ratio of the module.
    pub fn get_gear_ratio(&self) -> GearRatio {
        self.gear_ratio
    }

    /// Returns the motor controllers of the module.
    pub fn get_hardware(&self) -> &ModuleHardware<M> {
        &self.hardware
    }

    /// Returns the motor controllers of the module.
    pub fn get_hardware_mut(&mut self) -> &mut ModuleHardware<M> {
        &mut self.hardware
    }

    /// Returns a value indicating whether the module locks its wheel when it stands still.
    pub fn is_auto_lock_enabled(&self) -> bool {
        self.auto_lock.is_enabled()
    }

    /// Returns a value indicating whether the wheel is locked, either by the auto-lock timer or
    /// by [SwerveModule::lock].
    pub fn is_locked(&self) -> bool {
        self.auto_lock.is_locked()
    }

    /// Returns a value indicating whether the module runs on simulated encoders.
    pub fn is_simulated(&self) -> bool {
        self.simulation.is_some()
    }

    /// Returns a value indicating whether the wheel was slipping during the last command.
    pub fn is_slipping(&self) -> bool {
        self.traction_control.is_slipping()
    }

    /// Returns a value indicating whether the drive command is limited when the wheel slips.
    pub fn is_traction_control_enabled(&self) -> bool {
        self.traction_control.is_enabled()
    }

    /// Returns the location of the module.
    pub fn get_location(&self) -> ModuleLocation {
        self.location
    }

    /// Turns the wheel to the nearest diagonal heading and stops driving, without waiting
    /// for the auto-lock time.
    ///
    /// The module stays locked until it is asked to move.
    pub fn lock(&mut self) {
        self.auto_lock.lock();

        let current = self.to_chassis_angle(self.feedback().steer_position);
        self.apply(ModuleState::new(0.0, nearest_diagonal(current)));
    }

    /// Returns the period of the control loop.
    pub fn get_loop_period(&self) -> Duration {
        self.loop_period
    }

    /// Returns the theoretical top speed of the module in meters per second.
    ///
    /// The top speed is not enforced by the module. It is provided so that the chassis
    /// kinematics can scale the requested wheel speeds.
    pub fn get_max_linear_speed(&self) -> f64 {
        self.hardware
            .drive_motor
            .get_kind()
            .get_free_speed_in_rotations_per_second()
            * self.gear_ratio.get_meters_per_motor_rotation()
            * DRIVE_EFFICIENCY
    }

    /// Returns the coordinate of the module relative to the center of the chassis, in meters.
    pub fn get_module_coordinate(&self) -> Vector2<f64> {
        self.location
            .get_coordinate(self.wheelbase_in_meters, self.track_width_in_meters)
    }

    /// Creates a new [SwerveModule] instance and configures its motor controllers.
    ///
    /// Traction control and auto-lock are enabled. The module is considered to have been
    /// stationary since its creation.
    ///
    /// ## Parameters
    ///
    /// * 'hardware' - The motor controllers of the module
    /// * 'config' - The configuration of the module
    /// * 'clock' - The monotonic time source for the module timers
    ///
    /// ## Errors
    ///
    /// Returns the errors of [ModuleConfig::validate] when the configuration is invalid.
    pub fn new(
        mut hardware: ModuleHardware<M>,
        config: ModuleConfig,
        clock: C,
    ) -> Result<Self, Error> {
        config.validate()?;

        let meters_per_rotation = config.gear_ratio.get_meters_per_motor_rotation();
        hardware.drive_motor.configure(&MotorSetup::new(
            meters_per_rotation,
            meters_per_rotation / 60.0,
            Some(config.drive_current_limit_in_amps),
        ));
        hardware
            .rotate_motor
            .configure(&MotorSetup::new(TAU, TAU / 60.0, None));

        hardware.drive_motor.update_inputs();
        hardware.rotate_motor.update_inputs();

        let now = clock.now();
        let mut result = Self {
            hardware,
            clock,
            location: config.location,
            gear_ratio: config.gear_ratio,
            wheelbase_in_meters: config.wheelbase_in_meters,
            track_width_in_meters: config.track_width_in_meters,
            loop_period: config.get_loop_period(),
            traction_control: TractionControl::new(config.slip_ratio, config.get_max_slipping_time()),
            auto_lock: AutoLock::new(config.get_auto_lock_time(), now),
            commanded: ModuleState::default(),
            simulation: None,
        };

        // Hold the wheel where it is until the first drive command arrives
        let current = result.to_chassis_angle(result.feedback().steer_position);
        result.commanded = ModuleState::new(0.0, current);

        info!(
            location = %result.location,
            gear_ratio = %result.gear_ratio,
            motor = %result.hardware.drive_motor.get_kind(),
            max_linear_speed = result.get_max_linear_speed(),
            "Created swerve module"
        );

        Ok(result)
    }

    /// Refreshes the motor controller telemetry and logs the state of the module.
    ///
    /// Should be called once per control period.
    #[cfg_attr(test, mutants::skip)] // Only produces log output
    pub fn periodic(&mut self) {
        self.update_inputs();

        let position = self.get_position();
        let state = self.get_state();
        debug!(
            location = %self.location,
            speed = state.get_speed_in_meters_per_second(),
            angle = state.get_angle_in_radians(),
            distance = position.get_distance_in_meters(),
            drive_current = self.hardware.drive_motor.get_measured_current(),
            commanded_speed = self.commanded.get_speed_in_meters_per_second(),
            commanded_angle = self.commanded.get_angle_in_radians(),
            slipping = self.is_slipping(),
            locked = self.is_locked(),
            "Module telemetry"
        );
    }

    /// Returns the distance driven by the wheel and the current heading of the wheel, in the
    /// chassis frame.
    ///
    /// The readings only change when the module is commanded or when the simulation is
    /// stepped, so repeated calls return the same value.
    pub fn get_position(&self) -> ModulePosition {
        let feedback = self.feedback();
        ModulePosition::new(
            feedback.drive_position,
            self.to_chassis_angle(feedback.steer_position),
        )
    }

    /// Sets the driven distance of the wheel back to zero.
    pub fn reset_drive_encoder(&mut self) {
        self.hardware.drive_motor.reset_position();
        if let Some(wheel) = self.simulation.as_mut() {
            wheel.reset_drive_position();
        }
    }

    /// Drives the module towards the desired state.
    ///
    /// Sends exactly one velocity setpoint to the drive motor controller and one position
    /// setpoint to the steer motor controller.
    ///
    /// ## Parameters
    ///
    /// * 'desired' - The desired wheel speed and heading in the chassis frame
    pub fn set(&mut self, desired: ModuleState) {
        self.update_inputs();

        let now = self.clock.now();
        let feedback = self.feedback();
        let current_angle = self.to_chassis_angle(feedback.steer_position);

        let optimized = desired.optimize(current_angle);
        let speed = self.traction_control.limit(
            optimized.get_speed_in_meters_per_second(),
            feedback.drive_velocity,
            now,
        );

        let command = match self
            .auto_lock
            .update(optimized.get_speed_in_meters_per_second(), now)
        {
            LockStage::Driving => ModuleState::new(speed, optimized.get_angle_in_radians()),
            LockStage::Holding => ModuleState::new(0.0, self.commanded.get_angle_in_radians()),
            LockStage::Locked => ModuleState::new(0.0, nearest_diagonal(current_angle)),
        };

        trace!(
            location = %self.location,
            desired_speed = desired.get_speed_in_meters_per_second(),
            desired_angle = desired.get_angle_in_radians(),
            optimized_speed = optimized.get_speed_in_meters_per_second(),
            optimized_angle = optimized.get_angle_in_radians(),
            speed = command.get_speed_in_meters_per_second(),
            angle = command.get_angle_in_radians(),
            "Set module state"
        );

        self.apply(command);
    }

    /// Moves the simulated encoders through one control period.
    ///
    /// The first call switches the module from the hardware encoders to simulated encoders,
    /// starting from the last hardware readings. From then on the wheel follows the commanded
    /// state perfectly.
    pub fn simulation_periodic(&mut self) {
        let steer_position = self.to_motor_angle(self.commanded.get_angle_in_radians());
        let speed = self.commanded.get_speed_in_meters_per_second();
        let period = self.loop_period;

        let hardware = &self.hardware;
        let wheel = self.simulation.get_or_insert_with(|| {
            SimulatedWheel::new(
                hardware.drive_motor.get_measured_position(),
                hardware.rotate_motor.get_measured_position(),
            )
        });
        wheel.step(speed, steer_position, period);
    }

    /// Returns the measured wheel speed and heading in the chassis frame.
    pub fn get_state(&self) -> ModuleState {
        let feedback = self.feedback();
        ModuleState::new(
            feedback.drive_velocity,
            self.to_chassis_angle(feedback.steer_position),
        )
    }

    /// Stops both motors. The module keeps its commanded heading.
    pub fn stop(&mut self) {
        self.hardware.drive_motor.stop();
        self.hardware.rotate_motor.stop();
        self.commanded = ModuleState::new(0.0, self.commanded.get_angle_in_radians());
    }

    /// Translates a steer encoder angle into the chassis frame.
    fn to_chassis_angle(&self, motor_angle: f64) -> f64 {
        normalize_angle(motor_angle - self.location.get_offset_in_radians())
    }

    /// Translates a chassis frame angle into the steer encoder frame.
    fn to_motor_angle(&self, chassis_angle: f64) -> f64 {
        normalize_angle(chassis_angle + self.location.get_offset_in_radians())
    }

    /// Flips between allowing and not allowing the module to lock its wheel.
    pub fn toggle_auto_lock(&mut self) {
        self.auto_lock.toggle();
        debug!(
            location = %self.location,
            enabled = self.auto_lock.is_enabled(),
            "Auto-lock toggled"
        );
    }

    /// Flips between limiting and not limiting the drive command when the wheel slips.
    pub fn toggle_traction_control(&mut self) {
        self.traction_control.toggle();
        debug!(
            location = %self.location,
            enabled = self.traction_control.is_enabled(),
            "Traction control toggled"
        );
    }

    fn update_inputs(&mut self) {
        self.hardware.drive_motor.update_inputs();
        self.hardware.rotate_motor.update_inputs();
    }
}
