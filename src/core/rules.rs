//! Phishing heuristics as declarative data.
//!
//! Each [`Rule`] pairs a [`Pattern`] with the message reported when it
//! matches. A [`RuleSet`] evaluates every rule in declaration order against
//! the raw input string and collects the messages of all matches; nothing is
//! short-circuited or de-duplicated.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GuardianError;
use crate::url::psl::split_host_with_psl;

/// Brand names commonly impersonated in phishing hosts.
pub const DEFAULT_BRANDS: [&str; 6] = [
    "paypal",
    "ebay",
    "amazon",
    "bankofamerica",
    "wellsfargo",
    "chase",
];

pub const MSG_BRAND_MIMICRY: &str = "Suspicious domain mimicking known brand";
pub const MSG_AT_SYMBOL: &str = "URL contains '@' character - often used in phishing attempts";
pub const MSG_FREE_TLD: &str =
    "URL uses free domain extension often associated with malicious sites";
pub const MSG_LOGIN_PHP: &str = "Generic login page - could be phishing";
pub const MSG_HEX_PATH: &str = "Long hexadecimal strings in path - could be obfuscation";

static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://").expect("scheme prefix pattern"));

/// How a rule decides whether the input matches.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Plain regular expression, matched anywhere in the input.
    Regex(Regex),
    /// A brand label following the scheme and an optional subdomain prefix.
    ///
    /// The legitimate `www.<brand>.<suffix>` host is exempt. This needs a
    /// negative look-ahead on `www.`, which `regex` does not support, so it
    /// is matched by hand.
    Brand(Vec<String>),
}

impl Pattern {
    /// Compile a regular-expression pattern.
    pub fn regex(source: &str) -> Result<Self, GuardianError> {
        Ok(Pattern::Regex(Regex::new(source)?))
    }

    /// Test the pattern against the raw input.
    pub fn is_match(&self, input: &str) -> bool {
        match self {
            Pattern::Regex(re) => re.is_match(input),
            Pattern::Brand(brands) => brands.iter().any(|brand| mimics_brand(input, brand)),
        }
    }
}

/// A single heuristic: identifier, pattern and reported message.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    pub message: &'static str,
    pub pattern: Pattern,
}

impl Rule {
    pub fn new(id: &'static str, message: &'static str, pattern: Pattern) -> Self {
        Self { id, message, pattern }
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }
}

/// Ordered collection of heuristic rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build an empty rule set.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it is evaluated after all existing rules.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Default rules with additional brand names added to the brand rule.
    pub fn with_extra_brands<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut brands: Vec<String> = DEFAULT_BRANDS.iter().map(|b| b.to_string()).collect();
        for brand in extra {
            let brand = brand.into();
            if !brand.is_empty() && !brands.contains(&brand) {
                brands.push(brand);
            }
        }
        Self::build(brands)
    }

    fn build(brands: Vec<String>) -> Self {
        let mut set = Self::empty();
        set.push(Rule::new("brand-mimicry", MSG_BRAND_MIMICRY, Pattern::Brand(brands)));
        set.push(Rule::new("at-symbol", MSG_AT_SYMBOL, builtin(r"@")));
        set.push(Rule::new("free-tld", MSG_FREE_TLD, builtin(r"\.(tk|ml|ga|cf|gq)$")));
        set.push(Rule::new("login-php", MSG_LOGIN_PHP, builtin(r"https?://[^/]+/login\.php")));
        set.push(Rule::new(
            "hex-path-obfuscation",
            MSG_HEX_PATH,
            builtin(r"https?://[^/]+/[a-f0-9]{16,}"),
        ));
        set
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Messages of every rule matching `input`, in declaration order.
    pub fn scan(&self, input: &str) -> Vec<String> {
        self.rules
            .iter()
            .filter(|rule| rule.is_match(input))
            .map(|rule| rule.message.to_string())
            .collect()
    }

    /// Identifiers of every rule matching `input`, in declaration order.
    pub fn matching_ids(&self, input: &str) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.is_match(input))
            .map(|rule| rule.id)
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::build(DEFAULT_BRANDS.iter().map(|b| b.to_string()).collect())
    }
}

// Built-in patterns are constants and always compile.
fn builtin(source: &str) -> Pattern {
    Pattern::regex(source).unwrap_or_else(|e| panic!("built-in rule {:?} is invalid: {}", source, e))
}

/// Characters that end the prefix run in the brand pattern.
const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Does any `http(s)://` occurrence in `input` lead to `[prefix.]<brand>.`?
///
/// The prefix may be any run of characters up to a line break that ends in a
/// dot. When the text after the scheme begins with `www.`, the match only
/// counts if the host is something other than `www.<brand>.<suffix>`.
pub fn mimics_brand(input: &str, brand: &str) -> bool {
    if brand.is_empty() {
        return false;
    }

    SCHEME_PREFIX.find_iter(input).any(|scheme| {
        let rest = &input[scheme.end()..];
        let line = rest.split(LINE_BREAKS).next().unwrap_or_default();

        line.match_indices(brand).any(|(at, _)| {
            let followed_by_dot = line[at + brand.len()..].starts_with('.');
            let label_start = at == 0 || line[..at].ends_with('.');
            if !followed_by_dot || !label_start {
                return false;
            }
            if at == 0 || !line.starts_with("www.") {
                return true;
            }
            !is_genuine_www_host(line, brand)
        })
    })
}

/// The host portion of `after_scheme` is exactly `www.<brand>.<suffix>`.
fn is_genuine_www_host(after_scheme: &str, brand: &str) -> bool {
    let host = after_scheme
        .split(['/', '?', '#', ':', '\\'])
        .next()
        .unwrap_or_default();

    split_host_with_psl(host)
        .map(|parts| parts.is_www_of(brand))
        .unwrap_or(false)
}
