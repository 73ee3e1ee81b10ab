//! Core classification functionality.
//!
//! This module contains the URL safety classifier:
//! - The ordered validation pipeline
//! - The declarative phishing heuristic rules

pub mod classifier;
pub mod rules;

// Re-export main functionality
pub use classifier::{classify, Classifier};
pub use rules::{mimics_brand, Pattern, Rule, RuleSet, DEFAULT_BRANDS};
