//! Core data structures returned by the URL safety classifier.

use serde::{Deserialize, Serialize};

/// Summary message for empty input.
pub const MSG_EMPTY: &str = "Please enter a URL";
/// Summary message when the input lacks an `http://` or `https://` prefix.
pub const MSG_MISSING_PROTOCOL: &str = "Invalid URL - Missing protocol";
/// Summary message when structural parsing fails.
pub const MSG_INVALID_FORMAT: &str = "Invalid URL format";
/// Summary message when the hostname labels are malformed.
pub const MSG_INVALID_DOMAIN: &str = "Invalid domain name";
/// Summary message when one or more heuristics fire.
pub const MSG_PHISHING: &str = "Potential phishing URL detected";
/// Summary message for accepted URLs.
pub const MSG_SAFE: &str = "This URL appears to be valid and safe";

/// Which stage of the pipeline decided a verdict.
///
/// Exactly one kind holds for any classified input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictKind {
    /// No input was supplied.
    Empty,
    /// Input does not start with `http://` or `https://`.
    MissingScheme,
    /// The URL parser rejected the input.
    Malformed,
    /// The hostname does not have at least two non-empty labels.
    InvalidDomain,
    /// At least one phishing heuristic matched.
    Suspicious,
    /// Passed every check.
    Accepted,
}

/// Browser-style view of a parsed URL.
///
/// Values follow the conventions of a browser location object: the scheme
/// keeps its trailing colon, query and fragment keep their `?`/`#` sigils and
/// are empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedComponents {
    /// Scheme with trailing colon (`https:`)
    #[serde(rename = "protocol")]
    pub scheme: String,
    /// Hostname plus `:port` when a non-default port is given
    pub host: String,
    /// Hostname only (`www.github.com`, `[2001:db8::1]`)
    pub hostname: String,
    /// Path, `/` for an empty path
    #[serde(rename = "pathname")]
    pub path: String,
    /// Query including leading `?`, or empty
    #[serde(rename = "search")]
    pub query: String,
    /// Fragment including leading `#`, or empty
    #[serde(rename = "hash")]
    pub fragment: String,
}

/// Result of classifying one URL string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Structurally acceptable and not flagged by any heuristic.
    pub is_valid: bool,
    /// One or more phishing heuristics matched.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_suspicious: bool,
    /// Human-readable summary.
    pub message: String,
    /// Specific reasons, in the order they were found.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Parsed URL, present only for accepted URLs.
    #[serde(rename = "parsedURL", default, skip_serializing_if = "Option::is_none")]
    pub parsed_components: Option<ParsedComponents>,
}

impl Verdict {
    /// Build a rejection verdict with a single detail line.
    pub fn invalid(message: &str, detail: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            is_suspicious: false,
            message: message.to_string(),
            details: vec![detail.into()],
            parsed_components: None,
        }
    }

    /// Build a verdict for a URL that matched phishing heuristics.
    pub fn suspicious(details: Vec<String>) -> Self {
        Self {
            is_valid: false,
            is_suspicious: true,
            message: MSG_PHISHING.to_string(),
            details,
            parsed_components: None,
        }
    }

    /// Build a verdict for an accepted URL.
    pub fn accepted(components: ParsedComponents) -> Self {
        Self {
            is_valid: true,
            is_suspicious: false,
            message: MSG_SAFE.to_string(),
            details: Vec::new(),
            parsed_components: Some(components),
        }
    }

    /// True when the URL was accepted.
    pub fn is_safe(&self) -> bool {
        self.is_valid && !self.is_suspicious
    }

    /// Classify which pipeline stage produced this verdict.
    pub fn kind(&self) -> VerdictKind {
        if self.is_suspicious {
            return VerdictKind::Suspicious;
        }
        if self.is_valid {
            return VerdictKind::Accepted;
        }
        match self.message.as_str() {
            MSG_EMPTY => VerdictKind::Empty,
            MSG_MISSING_PROTOCOL => VerdictKind::MissingScheme,
            MSG_INVALID_DOMAIN => VerdictKind::InvalidDomain,
            _ => VerdictKind::Malformed,
        }
    }
}
