/// Defines where a module sits on the chassis and how it is geared
pub mod module_location;

/// Defines the value types exchanged with a module
pub mod module_state;

/// Defines the configuration of a module
pub mod config;

/// Provides the wheel slip limiting
pub mod traction_control;

/// Provides the timer that locks a stationary module
pub mod auto_lock;

/// Provides the integration of the wheel motion when there is no hardware
pub mod simulation;

/// Provides the module controller
pub mod swerve_module;
