//! URL handling module for linkstage
//!
//! This module provides seed address validation, raw href classification,
//! and resolution of hrefs into absolute addresses.

mod resolve;

use crate::UrlError;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

// Re-export main functions
pub use resolve::resolve_href;

/// The four forms a raw anchor href can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HrefKind {
    /// Starts with `/` - relative to the site root
    RootRelative,
    /// Starts with `#` - an anchor within the source page itself
    FragmentOnly,
    /// Carries a scheme prefix - already a full address
    Absolute,
    /// Anything else - relative to the source page's directory
    PathRelative,
}

impl HrefKind {
    /// Returns true if resolution leaves the href unchanged
    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute)
    }
}

fn scheme_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]+://").unwrap())
}

/// Classifies a raw href into one of the four resolution forms
///
/// Classification order matters: a leading `/` or `#` is checked before the
/// scheme test, and anything that falls through is treated as a path
/// relative to the source page's directory.
pub fn classify_href(href: &str) -> HrefKind {
    if href.starts_with('/') {
        HrefKind::RootRelative
    } else if href.starts_with('#') {
        HrefKind::FragmentOnly
    } else if scheme_pattern().is_match(href) {
        HrefKind::Absolute
    } else {
        HrefKind::PathRelative
    }
}

/// Parses and validates an address that is about to be fetched
///
/// Only HTTP and HTTPS addresses with a host are fetchable; everything the
/// resolver emits satisfies this, but seed addresses arrive from the CLI
/// and must be checked.
///
/// # Arguments
///
/// * `address` - The address string to parse
///
/// # Returns
///
/// * `Ok(Url)` - Parsed absolute URL
/// * `Err(UrlError)` - Malformed, wrong scheme, or missing host
pub fn parse_address(address: &str) -> Result<Url, UrlError> {
    let url = Url::parse(address).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
