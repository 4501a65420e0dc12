//! Swing Golf - a single-hole golf game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (swing physics, hole state machine)
//! - `settings`: Front-end configuration and random hole generation

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{Course, CourseConfig, GameState, Swing, SwingError};

/// Game configuration constants
pub mod consts {
    /// Gravitational acceleration (m/s²)
    pub const GRAVITY: f64 = 9.8;
    /// How close to the cup the ball must come to count as holed (meters)
    pub const TOLERANCE: f64 = 0.1;

    /// Launch angle bounds in degrees, both exclusive
    pub const MIN_LAUNCH_ANGLE: f64 = 0.0;
    pub const MAX_LAUNCH_ANGLE: f64 = 90.0;

    /// Course defaults
    pub const DEFAULT_MAX_SWINGS: u32 = 8;
    pub const DEFAULT_COURSE_ROUGH: f64 = 1000.0;
}

/// Horizontal range of a projectile launched from flat ground
#[inline]
pub fn launch_range(angle_deg: f64, velocity: f64) -> f64 {
    velocity.powi(2) / consts::GRAVITY * (2.0 * angle_deg.to_radians()).sin()
}

/// Whether an angle lies strictly inside the launch bounds (NaN never does)
#[inline]
pub fn is_valid_launch_angle(angle_deg: f64) -> bool {
    angle_deg > consts::MIN_LAUNCH_ANGLE && angle_deg < consts::MAX_LAUNCH_ANGLE
}
