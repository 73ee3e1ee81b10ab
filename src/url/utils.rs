//! Structural URL helpers used by the classifier.

use url::Url;

use crate::types::ParsedComponents;

/// Split a hostname into its dot-separated labels, keeping empty ones.
///
/// # Examples
///
/// ```
/// use url_guardian::url::hostname_labels;
///
/// assert_eq!(hostname_labels("www.github.com"), vec!["www", "github", "com"]);
/// assert_eq!(hostname_labels("..example.com"), vec!["", "", "example", "com"]);
/// ```
pub fn hostname_labels(hostname: &str) -> Vec<&str> {
    hostname.split('.').collect()
}

/// Check that a hostname has at least two labels and none of them is empty.
///
/// Leading, trailing and consecutive dots all produce an empty label.
///
/// # Examples
///
/// ```
/// use url_guardian::url::has_valid_domain_structure;
///
/// assert!(has_valid_domain_structure("example.com"));
/// assert!(!has_valid_domain_structure("localhost"));
/// assert!(!has_valid_domain_structure("example.com."));
/// ```
pub fn has_valid_domain_structure(hostname: &str) -> bool {
    let labels = hostname_labels(hostname);
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Extract the browser-style components of a parsed URL.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use url_guardian::url::parsed_components;
///
/// let url = Url::parse("https://example.com:8443/search?q=test#results").unwrap();
/// let parts = parsed_components(&url);
/// assert_eq!(parts.scheme, "https:");
/// assert_eq!(parts.host, "example.com:8443");
/// assert_eq!(parts.hostname, "example.com");
/// assert_eq!(parts.query, "?q=test");
/// assert_eq!(parts.fragment, "#results");
/// ```
pub fn parsed_components(url: &Url) -> ParsedComponents {
    let hostname = url.host_str().unwrap_or_default().to_string();

    // port() is None for the scheme's default port
    let host = match url.port() {
        Some(port) => format!("{}:{}", hostname, port),
        None => hostname.clone(),
    };

    let path = match url.path() {
        "" => "/".to_string(),
        path => path.to_string(),
    };

    ParsedComponents {
        scheme: format!("{}:", url.scheme()),
        host,
        hostname,
        path,
        query: with_sigil('?', url.query()),
        fragment: with_sigil('#', url.fragment()),
    }
}

/// An empty query or fragment reads back as an empty string, like a browser.
fn with_sigil(sigil: char, part: Option<&str>) -> String {
    match part {
        Some(value) if !value.is_empty() => format!("{}{}", sigil, value),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_structure() {
        assert!(has_valid_domain_structure("www.github.com"));
        assert!(has_valid_domain_structure("192.168.1.1"));
        assert!(!has_valid_domain_structure("..example.com"));
        assert!(!has_valid_domain_structure(".example.com"));
        assert!(!has_valid_domain_structure("example..com"));
        assert!(!has_valid_domain_structure("[2001:db8::1]"));
        assert!(!has_valid_domain_structure(""));
    }

    #[test]
    fn test_parsed_components_minimal() {
        let url = Url::parse("https://www.github.com").unwrap();
        let parts = parsed_components(&url);

        assert_eq!(parts.scheme, "https:");
        assert_eq!(parts.host, "www.github.com");
        assert_eq!(parts.hostname, "www.github.com");
        assert_eq!(parts.path, "/");
        assert_eq!(parts.query, "");
        assert_eq!(parts.fragment, "");
    }

    #[test]
    fn test_default_port_is_dropped() {
        let url = Url::parse("https://example.com:443/page").unwrap();
        let parts = parsed_components(&url);
        assert_eq!(parts.host, "example.com");
        assert_eq!(parts.path, "/page");
    }

    #[test]
    fn test_empty_query_and_fragment() {
        let url = Url::parse("http://example.com/?#").unwrap();
        let parts = parsed_components(&url);
        assert_eq!(parts.scheme, "http:");
        assert_eq!(parts.query, "");
        assert_eq!(parts.fragment, "");
    }
}
