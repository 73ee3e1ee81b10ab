use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::{Classifier, RuleSet};
use crate::error::GuardianError;
use crate::game::Difficulty;
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Global configuration loaded from `~/.config/url-guardian/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardianConfig {
    /// Number of scans kept in the history.
    pub history_limit: usize,
    /// Difficulty used by `play` when none is given.
    pub default_difficulty: Difficulty,
    /// Countdown shown per quiz stage, in seconds.
    pub stage_time_limit_secs: u64,
    /// Brand names added to the built-in brand-mimicry list.
    pub extra_brands: Vec<String>,
    /// Override for the data file; defaults to the XDG data directory.
    pub data_file: Option<PathBuf>,
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_difficulty: Difficulty::Easy,
            stage_time_limit_secs: 15,
            extra_brands: Vec::new(),
            data_file: None,
        }
    }
}

impl GuardianConfig {
    /// Classifier with the default rules plus any configured brands.
    pub fn classifier(&self) -> Classifier {
        if self.extra_brands.is_empty() {
            Classifier::new()
        } else {
            Classifier::with_rules(RuleSet::with_extra_brands(self.extra_brands.iter().cloned()))
        }
    }
}

pub fn config_path() -> Result<PathBuf, GuardianError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("url-guardian")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GuardianConfig, GuardianError> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GuardianConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: GuardianConfig = toml::from_str(&data)?;
    Ok(cfg)
}
