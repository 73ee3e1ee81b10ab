//! Application state owned by the caller.
//!
//! The classifier never sees this; front ends pass it explicitly to the
//! operations that update history and statistics.

use crate::challenge::{ChallengeOutcome, DailyChallenge};
use crate::core::Classifier;
use crate::error::GuardianError;
use crate::history::{ScanHistory, DEFAULT_HISTORY_LIMIT};
use crate::learning::{self, LearningModule, MODULE_PROGRESS_STEP};
use crate::profile::UserProfile;
use crate::types::Verdict;

/// Scan history and profile, the persisted part of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub history: ScanHistory,
    pub profile: UserProfile,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl AppState {
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: ScanHistory::with_limit(limit),
            profile: UserProfile::default(),
        }
    }

    /// Classify a user-entered URL and record it.
    ///
    /// Surrounding whitespace is trimmed first. Blank input is classified
    /// (yielding the empty-input verdict) but not recorded.
    pub fn scan(&mut self, classifier: &Classifier, raw: &str) -> Verdict {
        let url = raw.trim();
        let verdict = classifier.classify(url);
        if url.is_empty() {
            return verdict;
        }

        self.history.record(url, verdict.clone());
        self.profile.record_scan();
        tracing::info!(url, safe = verdict.is_safe(), "recorded scan");
        verdict
    }

    /// Open a learning module and advance its progress.
    pub fn open_module(&mut self, id: &str) -> Result<&'static LearningModule, GuardianError> {
        let module = learning::find_module(id)?;
        self.profile.advance_module(module.id, MODULE_PROGRESS_STEP);
        Ok(module)
    }

    /// Answer the daily challenge and update the streak.
    pub fn answer_challenge(
        &mut self,
        challenge: &DailyChallenge,
        choice: &str,
    ) -> Result<ChallengeOutcome, GuardianError> {
        let outcome = challenge.check(choice)?;
        if outcome.correct {
            self.profile.extend_streak();
        } else {
            self.profile.reset_streak();
        }
        Ok(outcome)
    }
}
