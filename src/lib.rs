//! Linkstage: staged link discovery
//!
//! This crate implements a multi-stage link discovery pipeline: starting from
//! a seed page, each stage fetches every address in the current link set,
//! extracts anchor hrefs matching that stage's pattern, resolves them to
//! absolute addresses, and hands the resulting set to the next stage.

pub mod config;
pub mod pipeline;
pub mod url;

use thiserror::Error;

/// Main error type for linkstage operations
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Fetch failed for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for linkstage operations
pub type Result<T> = std::result::Result<T, StageError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::RunConfig;
pub use pipeline::discover;
pub use url::{classify_href, parse_address, resolve_href, HrefKind};
