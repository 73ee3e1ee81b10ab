//! Public Suffix List integration for domain splitting.

use psl::{List, Psl};

/// A hostname split into public suffix, registrable label and subdomain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostParts {
    /// Public suffix, possibly multi-label (`com`, `co.uk`)
    pub suffix: String,
    /// Registrable label immediately left of the suffix (`paypal`)
    pub domain: String,
    /// Everything left of the registrable label, joined with dots (`www`)
    pub subdomain: String,
}

impl HostParts {
    /// True when the host is exactly `www.<domain>.<suffix>`.
    pub fn is_www_of(&self, label: &str) -> bool {
        self.subdomain == "www" && self.domain == label
    }
}

/// Split a hostname using the Public Suffix List.
///
/// Falls back to treating the rightmost label as the suffix when the list
/// cannot place the host. Returns `None` for hosts with fewer than two labels.
pub fn split_host_with_psl(host: &str) -> Option<HostParts> {
    split_with_psl(host).or_else(|| split_host_fallback(host))
}

fn split_with_psl(host: &str) -> Option<HostParts> {
    let suffix = List.suffix(host.as_bytes())?;
    let suffix = std::str::from_utf8(suffix.as_bytes()).ok()?;

    let registrable = List.domain(host.as_bytes())?;
    let registrable = std::str::from_utf8(registrable.as_bytes()).ok()?;

    // registrable = "<domain>.<suffix>"
    if registrable.len() <= suffix.len() + 1 || !registrable.ends_with(suffix) {
        return None;
    }
    let domain = registrable[..registrable.len() - suffix.len()].strip_suffix('.')?;

    let subdomain = if host.len() > registrable.len() {
        host[..host.len() - registrable.len()]
            .strip_suffix('.')
            .unwrap_or_default()
    } else {
        ""
    };

    Some(HostParts {
        suffix: suffix.to_string(),
        domain: domain.to_string(),
        subdomain: subdomain.to_string(),
    })
}

/// Rightmost label is the suffix, the one before it the domain.
fn split_host_fallback(host: &str) -> Option<HostParts> {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        return None;
    }

    let suffix = labels[labels.len() - 1];
    let domain = labels[labels.len() - 2];
    let subdomain = labels[..labels.len() - 2].join(".");

    Some(HostParts {
        suffix: suffix.to_string(),
        domain: domain.to_string(),
        subdomain,
    })
}
