//! Local user profile and training statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Statistics shown on the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub username: String,
    pub level: u32,
    /// Consecutive correct daily challenges.
    pub streak: u32,
    pub best_streak: u32,
    /// Percentage, 0-100.
    pub accuracy: u32,
    /// URLs checked.
    pub scans: u64,
    /// Quiz stages answered correctly.
    pub games: u64,
    /// Percentage, 0-100.
    pub success_rate: u32,
    pub badges: Vec<String>,
    /// Learning module id to completion percentage.
    pub module_progress: BTreeMap<String, u8>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            username: "Cyber Defender".to_string(),
            level: 5,
            streak: 12,
            best_streak: 12,
            accuracy: 85,
            scans: 47,
            games: 36,
            success_rate: 92,
            badges: vec!["first-scan".to_string(), "phishing-expert".to_string()],
            module_progress: BTreeMap::new(),
        }
    }
}

impl UserProfile {
    pub fn record_scan(&mut self) {
        self.scans += 1;
    }

    pub fn record_correct_answer(&mut self) {
        self.games += 1;
    }

    /// Extend the challenge streak, tracking the best run.
    pub fn extend_streak(&mut self) {
        self.streak += 1;
        if self.streak > self.best_streak {
            self.best_streak = self.streak;
        }
    }

    pub fn reset_streak(&mut self) {
        self.streak = 0;
    }


    pub fn module_progress(&self, module: &str) -> u8 {
        self.module_progress.get(module).copied().unwrap_or(0)
    }

    /// Raise a module's progress by `step` points, capped at 100.
    pub fn advance_module(&mut self, module: &str, step: u8) -> u8 {
        let progress = self.module_progress.entry(module.to_string()).or_insert(0);
        *progress = progress.saturating_add(step).min(100);
        *progress
    }
}
