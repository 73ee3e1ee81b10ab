//! URL Guardian - heuristic phishing URL classifier and training tools
//!
//! The heart of this crate is a pure, stateless URL safety classifier: a
//! string goes in, a structured [`Verdict`] comes out. Around it sit the
//! pieces of a small security-awareness trainer: scan history, a user
//! profile, a timed quiz, a daily challenge and learning modules.
//!
//! # Quick Start
//!
//! ```
//! use url_guardian::{classify, VerdictKind};
//!
//! let verdict = classify("https://www.github.com");
//! assert!(verdict.is_valid);
//! let parts = verdict.parsed_components.unwrap();
//! assert_eq!(parts.hostname, "www.github.com");
//!
//! let verdict = classify("https://www.paypal.com.login.security.verify.com");
//! assert_eq!(verdict.kind(), VerdictKind::Suspicious);
//! assert_eq!(verdict.details, vec!["Suspicious domain mimicking known brand"]);
//! ```
//!
//! # Classification Pipeline
//!
//! Stages run in order and the first failing one decides the verdict:
//!
//! | Stage | Outcome message |
//! |-------|-----------------|
//! | empty input | "Please enter a URL" |
//! | `http://` / `https://` prefix | "Invalid URL - Missing protocol" |
//! | structural parse | "Invalid URL format" |
//! | hostname labels | "Invalid domain name" |
//! | phishing heuristics | "Potential phishing URL detected" |
//! | accept | "This URL appears to be valid and safe" |
//!
//! # Heuristics
//!
//! - Brand names (`paypal`, `ebay`, `amazon`, ...) used as a label of a lookalike host
//! - `@` anywhere in the URL
//! - Free TLDs: `.tk`, `.ml`, `.ga`, `.cf`, `.gq`
//! - A `/login.php` page right after the host
//! - 16 or more hex characters at the start of the path
//!
//! # Error Handling
//!
//! Classification never fails. Persistence, configuration and quiz
//! operations return `Result<T, GuardianError>`.

// Re-export the classifier
pub use crate::core::{classify, Classifier, Pattern, Rule, RuleSet};

// Re-export public types
pub use error::GuardianError;
pub use types::{ParsedComponents, Verdict, VerdictKind};

// Re-export application state
pub use challenge::{ChallengeOutcome, DailyChallenge};
pub use game::{Difficulty, GameSession};
pub use history::{ScanHistory, ScanRecord};
pub use profile::UserProfile;
pub use state::AppState;
pub use store::Store;

// Module declarations
pub mod challenge;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod history;
pub mod learning;
pub mod logging;
pub mod profile;
pub mod state;
pub mod store;
pub mod types;
pub mod url;
