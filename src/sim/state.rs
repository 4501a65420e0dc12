//! Hole outcome state machine
//!
//! The outcome is a single enum; the ended/won/lost flags are read off it, so
//! contradictory combinations (won and lost at once) cannot be represented.

use serde::{Deserialize, Serialize};

use super::course::CourseConfig;
use crate::consts::TOLERANCE;

/// Current phase of the hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Still swinging
    #[default]
    InProgress,
    /// Ball came to rest within tolerance of the cup
    Won,
    /// Swing budget used up
    LostTooManySwings,
    /// Ball ended up beyond the course length plus the rough
    LostOutOfBounds,
}

/// Where the hole stands right after a swing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleProgress {
    pub swing_count: u32,
    pub distance_from_hole: f64,
}

impl GameState {
    /// Next state after a swing has been recorded.
    ///
    /// Terminal states never change. Otherwise: holing out beats running out
    /// of swings, and going out of bounds is reported over running out of
    /// swings since it is the more specific cause.
    ///
    /// A hole no longer than the tolerance has no cup to play to: the ball
    /// starts inside it, so such a hole can only end in a loss.
    pub fn after_swing(self, config: &CourseConfig, progress: &HoleProgress) -> GameState {
        if self.has_ended() {
            return self;
        }

        let exhausted = progress.swing_count >= config.max_swings;
        let has_cup = config.course_length > TOLERANCE;
        let holed = has_cup && progress.distance_from_hole <= TOLERANCE;
        let max_bounds = config.course_length + config.course_rough;
        let out_of_bounds = progress.distance_from_hole > max_bounds;

        if holed {
            GameState::Won
        } else if out_of_bounds {
            GameState::LostOutOfBounds
        } else if exhausted {
            GameState::LostTooManySwings
        } else {
            GameState::InProgress
        }
    }

    pub fn has_ended(&self) -> bool {
        *self != GameState::InProgress
    }

    pub fn has_won(&self) -> bool {
        *self == GameState::Won
    }

    pub fn has_lost(&self) -> bool {
        matches!(self, GameState::LostTooManySwings | GameState::LostOutOfBounds)
    }

    pub fn is_out_of_bounds(&self) -> bool {
        *self == GameState::LostOutOfBounds
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::InProgress => "In progress",
            GameState::Won => "Won",
            GameState::LostTooManySwings => "Lost (too many swings)",
            GameState::LostOutOfBounds => "Lost (out of bounds)",
        }
    }
}
