//! Error types for URL Guardian operations.
//!
//! Classification itself never fails: every outcome is a [`crate::Verdict`].
//! These errors cover everything around it: persistence, configuration,
//! quiz sessions and learning modules.

use thiserror::Error;

/// Errors that can occur outside of URL classification.
#[derive(Error, Debug)]
pub enum GuardianError {
    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored application data is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be parsed.
    #[error("Invalid configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Configuration serialization failed: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// XDG base directories could not be resolved.
    #[error("XDG directory error: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),

    /// A heuristic rule pattern failed to compile.
    #[error("Invalid rule pattern: {0}")]
    Regex(#[from] regex::Error),

    /// No learning module exists with this id.
    #[error("Unknown learning module: {0}")]
    UnknownModule(String),

    /// The difficulty name is not one of easy, medium or hard.
    #[error("Unknown difficulty: {0} (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    /// The quiz session has already completed its last stage.
    #[error("The game is already finished")]
    GameFinished,

    /// The current stage was already answered.
    #[error("Stage {0} has already been answered")]
    AlreadyAnswered(usize),

    /// Tried to advance before answering the current stage.
    #[error("Stage {0} has not been answered yet")]
    NotAnswered(usize),

    /// The chosen URL is not one of the offered options.
    #[error("Not one of the offered options: {0}")]
    UnknownOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            GuardianError::UnknownModule("crypto".to_string()).to_string(),
            "Unknown learning module: crypto"
        );

        assert_eq!(
            GuardianError::AlreadyAnswered(3).to_string(),
            "Stage 3 has already been answered"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let guardian_error: GuardianError = json_error.into();

        match guardian_error {
            GuardianError::Json(_) => (),
            _ => panic!("Expected Json variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let guardian_error: GuardianError = io_error.into();
        assert!(guardian_error.to_string().starts_with("I/O error"));
    }
}
