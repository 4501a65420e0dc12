//! The hole: configuration, swing history and outcome

use serde::{Deserialize, Serialize};

use super::state::{GameState, HoleProgress};
use super::swing::{Swing, SwingError};
use crate::consts::*;

/// Fixed parameters of a hole
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseConfig {
    /// Distance from the tee to the cup (meters)
    pub course_length: f64,
    /// Swing budget
    pub max_swings: u32,
    /// Margin past the cup before the ball is out of bounds (meters)
    pub course_rough: f64,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            course_length: 0.0,
            max_swings: DEFAULT_MAX_SWINGS,
            course_rough: DEFAULT_COURSE_ROUGH,
        }
    }
}

impl CourseConfig {
    /// Clamp to usable values: no negative distances, at least one swing
    fn sanitized(self) -> Self {
        Self {
            course_length: self.course_length.max(0.0),
            max_swings: self.max_swings.max(1),
            course_rough: self.course_rough.max(0.0),
        }
    }
}

/// Serializable snapshot of a hole, for reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub config: CourseConfig,
    pub state: GameState,
    pub swing_counter: u32,
    pub distance_travelled: f64,
    pub distance_from_hole: f64,
    pub swings: Vec<Swing>,
}

/// A single golf hole.
///
/// Only [`Course::swing`] mutates it; everything else is a read-only view.
#[derive(Debug, Clone)]
pub struct Course {
    config: CourseConfig,
    /// Chronological, append-only
    swings: Vec<Swing>,
    state: GameState,
}

impl Course {
    /// Zero-length hole limited only by the swing budget
    pub fn with_max_swings(max_swings: u32) -> Self {
        Self::with_config(CourseConfig {
            course_length: 0.0,
            max_swings,
            course_rough: 0.0,
        })
    }

    /// Hole of the given length with the default swing budget and rough
    pub fn new(course_length: f64) -> Self {
        Self::with_config(CourseConfig {
            course_length,
            ..Default::default()
        })
    }

    pub fn with_config(config: CourseConfig) -> Self {
        Self {
            config: config.sanitized(),
            swings: Vec::new(),
            state: GameState::InProgress,
        }
    }

    /// Take a swing and evaluate the outcome.
    ///
    /// On error nothing about the course changes.
    pub fn swing(&mut self, angle: f64, velocity: f64) -> Result<&Swing, SwingError> {
        if self.state.has_ended() {
            log::warn!("Swing rejected: hole already ended ({})", self.state.as_str());
            return Err(SwingError::HoleFinished);
        }

        let swing = Swing::new(angle, velocity).inspect_err(|e| {
            log::warn!("Swing rejected: {e}");
        })?;
        self.swings.push(swing);

        let progress = HoleProgress {
            swing_count: self.swing_counter(),
            distance_from_hole: self.distance_from_hole(),
        };
        let previous = self.state;
        self.state = previous.after_swing(&self.config, &progress);

        log::debug!(
            "Swing {}: angle={} velocity={} distance={:.2} from_hole={:.2}",
            progress.swing_count,
            swing.angle(),
            swing.velocity(),
            swing.distance(),
            progress.distance_from_hole
        );
        if self.state != previous {
            log::info!(
                "Hole ended after {} swings: {}",
                progress.swing_count,
                self.state.as_str()
            );
        }

        Ok(&self.swings[self.swings.len() - 1])
    }

    pub fn swings(&self) -> &[Swing] {
        &self.swings
    }

    pub fn last_swing(&self) -> Option<&Swing> {
        self.swings.last()
    }

    pub fn swing_counter(&self) -> u32 {
        self.swings.len() as u32
    }

    pub fn swings_remaining(&self) -> u32 {
        self.config.max_swings.saturating_sub(self.swing_counter())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn has_ended(&self) -> bool {
        self.state.has_ended()
    }

    pub fn has_won(&self) -> bool {
        self.state.has_won()
    }

    pub fn has_lost(&self) -> bool {
        self.state.has_lost()
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.state.is_out_of_bounds()
    }

    pub fn is_hole_in_one(&self) -> bool {
        self.has_won() && self.swing_counter() == 1
    }

    /// Total ground covered by every swing
    pub fn distance_travelled(&self) -> f64 {
        self.swings.iter().map(Swing::distance).sum()
    }

    /// How far the ball is from the cup.
    ///
    /// Each swing flies straight at the cup from wherever the ball lies, so
    /// overshooting leaves the ball on the far side and the next swing comes
    /// back across.
    pub fn distance_from_hole(&self) -> f64 {
        self.swings
            .iter()
            .fold(self.config.course_length, |remaining, swing| {
                (remaining - swing.distance()).abs()
            })
    }

    /// Farthest the ball may be from the cup before it is out of bounds
    pub fn max_bounds(&self) -> f64 {
        self.config.course_length + self.config.course_rough
    }

    pub fn course_length(&self) -> f64 {
        self.config.course_length
    }

    pub fn course_rough(&self) -> f64 {
        self.config.course_rough
    }

    pub fn max_swings(&self) -> u32 {
        self.config.max_swings
    }

    pub fn config(&self) -> &CourseConfig {
        &self.config
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            config: self.config,
            state: self.state,
            swing_counter: self.swing_counter(),
            distance_travelled: self.distance_travelled(),
            distance_from_hole: self.distance_from_hole(),
            swings: self.swings.clone(),
        }
    }
}
