//! URL processing utilities.
//!
//! This module contains URL-related functionality:
//! - Hostname label checks and browser-style component extraction
//! - Public Suffix List (PSL) domain splitting

pub mod psl;
pub mod utils;

// Re-export main functionality
pub use self::psl::{split_host_with_psl, HostParts};
pub use utils::{has_valid_domain_structure, hostname_labels, parsed_components};
