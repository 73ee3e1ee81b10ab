//! The URL safety classifier.
//!
//! Classification is a single ordered pipeline that stops at the first
//! failing stage:
//!
//! 1. empty input
//! 2. missing `http://` / `https://` prefix (checked textually, before parsing)
//! 3. structural parse with the `url` crate
//! 4. hostname label structure
//! 5. phishing heuristics over the raw input
//! 6. accept
//!
//! Every outcome is a [`Verdict`]; nothing here returns an error or panics.

use once_cell::sync::Lazy;
use tracing::debug;
use url::Url;

use crate::core::rules::RuleSet;
use crate::types::{
    Verdict, MSG_EMPTY, MSG_INVALID_DOMAIN, MSG_INVALID_FORMAT, MSG_MISSING_PROTOCOL,
};
use crate::url::utils::{has_valid_domain_structure, parsed_components};

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::new);

/// Classify a URL with the default rule set.
///
/// # Examples
///
/// ```
/// use url_guardian::{classify, VerdictKind};
///
/// let verdict = classify("https://www.github.com");
/// assert!(verdict.is_valid);
/// assert_eq!(verdict.kind(), VerdictKind::Accepted);
///
/// let verdict = classify("https://paypal.verify.com/login.php");
/// assert!(verdict.is_suspicious);
/// assert_eq!(verdict.details.len(), 2);
/// ```
pub fn classify(input: &str) -> Verdict {
    DEFAULT_CLASSIFIER.classify(input)
}

/// Stateless URL classifier holding an immutable rule set.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    /// Classifier with the default heuristic rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with a custom rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run the classification pipeline on `input`.
    pub fn classify(&self, input: &str) -> Verdict {
        if input.is_empty() {
            debug!("rejected: empty input");
            return Verdict::invalid(MSG_EMPTY, "No URL provided");
        }

        if !input.starts_with("http://") && !input.starts_with("https://") {
            debug!("rejected: missing protocol");
            return Verdict::invalid(
                MSG_MISSING_PROTOCOL,
                "URL should start with http:// or https://",
            );
        }

        let parsed = match Url::parse(input) {
            Ok(url) => url,
            Err(err) => {
                debug!(error = %err, "rejected: structural parse failed");
                return Verdict::invalid(MSG_INVALID_FORMAT, err.to_string());
            }
        };

        let hostname = parsed.host_str().unwrap_or_default();
        if !has_valid_domain_structure(hostname) {
            debug!(hostname, "rejected: malformed domain");
            return Verdict::invalid(MSG_INVALID_DOMAIN, "The domain name appears to be malformed");
        }

        let detected = self.rules.scan(input);
        if !detected.is_empty() {
            debug!(matches = detected.len(), "flagged as suspicious");
            return Verdict::suspicious(detected);
        }

        debug!(hostname, "accepted");
        Verdict::accepted(parsed_components(&parsed))
    }
}
