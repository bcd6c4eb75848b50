/// Defines the capability interface for the motor controllers of a module
pub mod motor_controller;

/// Provides a motor controller handle that talks to the hardware over channels
pub mod channel_motor;

/// Provides an in-memory motor controller that records the commands it receives
pub mod recording_motor;
