//! Timed "find the invalid URL" quiz.
//!
//! This module contains the quiz game:
//! - The stage bank for each difficulty
//! - Time-based scoring and countdown phases
//! - The session state machine

pub mod data;
pub mod scoring;
pub mod session;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GuardianError;

// Re-export main functionality
pub use data::{stages, Stage, STAGES_PER_GAME};
pub use scoring::{calculate_points, progress_percent, Stopwatch, TimerPhase, STAGE_TIME_LIMIT};
pub use session::{Advance, AnswerOutcome, GameSession};

/// Quiz difficulty; harder levels multiply the points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Score multiplier: 1, 1.5 or 2.
    pub fn multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GuardianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GuardianError::UnknownDifficulty(s.to_string())),
        }
    }
}
