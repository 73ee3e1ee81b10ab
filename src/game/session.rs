//! A single play-through of the quiz.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use super::data::{stages, Stage};
use super::scoring::calculate_points;
use super::Difficulty;
use crate::error::GuardianError;

/// Result of answering one stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Points awarded (0 when wrong).
    pub points: u32,
    /// The URL the player should have picked.
    pub correct_url: String,
    pub explanation: &'static str,
}

/// What happened when moving past an answered stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the stage with this zero-based index.
    NextStage(usize),
    /// The last stage was done; carries the final score.
    Finished { score: u32 },
}

/// Quiz state for one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    stages: Vec<Stage>,
    current: usize,
    score: u32,
    correct_answers: usize,
    answered: bool,
    finished: bool,
}

impl GameSession {
    /// Start a game at stage 0 with no points.
    pub fn start(difficulty: Difficulty) -> Self {
        Self::with_stages(difficulty, stages(difficulty))
    }

    /// Start a game over a custom stage list.
    pub fn with_stages(difficulty: Difficulty, stages: Vec<Stage>) -> Self {
        let finished = stages.is_empty();
        Self {
            difficulty,
            stages,
            current: 0,
            score: 0,
            correct_answers: 0,
            answered: false,
            finished,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Zero-based index of the current stage.
    pub fn stage_index(&self) -> usize {
        self.current
    }

    pub fn is_last_stage(&self) -> bool {
        self.current + 1 >= self.stages.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// The stage being played, `None` once the game is over.
    pub fn stage(&self) -> Option<&Stage> {
        if self.finished {
            None
        } else {
            self.stages.get(self.current)
        }
    }

    /// Current stage URLs in random order.
    pub fn shuffled_options<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut urls = self.stage().map(Stage::all_urls).unwrap_or_default();
        urls.shuffle(rng);
        urls
    }

    pub fn options(&self) -> Vec<String> {
        self.shuffled_options(&mut rand::thread_rng())
    }

    /// Answer the current stage by picking `choice` after `elapsed`.
    pub fn answer(&mut self, choice: &str, elapsed: Duration) -> Result<AnswerOutcome, GuardianError> {
        let stage = self.stage().ok_or(GuardianError::GameFinished)?;
        if self.answered {
            return Err(GuardianError::AlreadyAnswered(self.current + 1));
        }
        if !stage.contains(choice) {
            return Err(GuardianError::UnknownOption(choice.to_string()));
        }

        let correct = choice == stage.invalid;
        let points = if correct {
            calculate_points(self.difficulty, elapsed)
        } else {
            0
        };
        let outcome = AnswerOutcome {
            correct,
            points,
            correct_url: stage.invalid.clone(),
            explanation: stage.explanation,
        };

        self.answered = true;
        self.score += points;
        if correct {
            self.correct_answers += 1;
        }
        tracing::debug!(stage = self.current + 1, correct, points, "stage answered");
        Ok(outcome)
    }

    /// Move on after answering; finishes the game after the last stage.
    pub fn next_stage(&mut self) -> Result<Advance, GuardianError> {
        if self.finished {
            return Err(GuardianError::GameFinished);
        }
        if !self.answered {
            return Err(GuardianError::NotAnswered(self.current + 1));
        }

        if self.is_last_stage() {
            self.finished = true;
            tracing::info!(score = self.score, difficulty = %self.difficulty, "game finished");
            return Ok(Advance::Finished { score: self.score });
        }

        self.current += 1;
        self.answered = false;
        Ok(Advance::NextStage(self.current))
    }
}
