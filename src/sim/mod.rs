//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - State changes only through `Course::swing`
//! - Stable swing order (chronological)
//! - No terminal or platform dependencies

pub mod course;
pub mod state;
pub mod swing;

pub use course::{Course, CourseConfig, CourseSummary};
pub use state::{GameState, HoleProgress};
pub use swing::{Swing, SwingError};
