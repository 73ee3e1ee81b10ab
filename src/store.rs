//! JSON persistence for scan history and the user profile.
//!
//! Everything lives under a single storage key: one JSON document
//! `{ "scanHistory": [...], "userProfile": {...} }` in `urlGuardianData.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GuardianError;
use crate::history::{ScanHistory, ScanRecord};
use crate::profile::UserProfile;
use crate::state::AppState;

/// Storage key naming the persisted document.
pub const STORAGE_KEY: &str = "urlGuardianData";

/// On-disk shape of the persisted document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredData {
    #[serde(default)]
    scan_history: Vec<ScanRecord>,
    #[serde(default)]
    user_profile: Option<UserProfile>,
}

/// File-backed store for [`AppState`].
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.local/share/url-guardian/urlGuardianData.json`.
    pub fn open_default() -> Result<Self, GuardianError> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("url-guardian")?;
        let path = xdg_dirs.place_data_file(format!("{}.json", STORAGE_KEY))?;
        Ok(Self::at(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved state, or defaults when nothing has been saved yet.
    pub fn load(&self, history_limit: usize) -> Result<AppState, GuardianError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no saved data at {}, using defaults", self.path.display());
                return Ok(AppState::with_history_limit(history_limit));
            }
            Err(e) => return Err(e.into()),
        };
        let stored: StoredData = serde_json::from_slice(&bytes)?;

        Ok(AppState {
            history: ScanHistory::from_records(stored.scan_history, history_limit),
            profile: stored.user_profile.unwrap_or_default(),
        })
    }

    /// Persist the history and profile, replacing any previous document.
    pub fn save(&self, state: &AppState) -> Result<(), GuardianError> {
        let stored = StoredData {
            scan_history: state.history.records().to_vec(),
            user_profile: Some(state.profile.clone()),
        };
        let json = serde_json::to_string_pretty(&stored)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        tracing::info!("saved {} scans to {}", state.history.len(), self.path.display());
        Ok(())
    }
}
