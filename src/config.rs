//! Run configuration for linkstage
//!
//! The CLI (or any programmatic caller) hands the pipeline a [`RunConfig`];
//! pattern strings are compiled and validated upfront, before any fetching,
//! so a bad pattern fails the run immediately.

use crate::{Result, StageError};
use regex::Regex;
use std::time::Duration;

/// Configuration for one discovery run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The seed address the first stage starts from
    pub start_url: String,

    /// Stage patterns, applied in order; one fetch-and-filter stage each
    pub patterns: Vec<String>,

    /// Maximum number of concurrent fetches within a stage
    pub max_concurrent: usize,

    /// Per-request timeout handed to the HTTP client
    pub timeout: Duration,
}

impl RunConfig {
    pub fn new(start_url: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            start_url: start_url.into(),
            patterns,
            max_concurrent: 8,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Compiles every pattern string, failing on the first invalid one
///
/// All patterns are validated before the pipeline issues a single request;
/// an invalid pattern is fatal for the whole run.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|e| StageError::Pattern {
                pattern: p.clone(),
                source: e,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_valid_patterns() {
        let patterns = vec![r"stats".to_string(), r"\.csv$".to_string()];
        let compiled = compile_patterns(&patterns).unwrap();
        assert_eq!(compiled.len(), 2);
        assert!(compiled[1].is_match("report.csv"));
        assert!(!compiled[1].is_match("report.html"));
    }

    #[test]
    fn test_compile_empty_list() {
        let compiled = compile_patterns(&[]).unwrap();
        assert!(compiled.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_fatal() {
        let patterns = vec![r"ok".to_string(), r"[unclosed".to_string()];
        let err = compile_patterns(&patterns).unwrap_err();
        match err {
            StageError::Pattern { pattern, .. } => assert_eq!(pattern, "[unclosed"),
            other => panic!("Expected pattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_pattern_search_semantics() {
        // A pattern matches if it occurs anywhere in the href, not only as
        // a full match
        let compiled = compile_patterns(&["stats".to_string()]).unwrap();
        assert!(compiled[0].is_match("/annual/stats/2024.html"));
    }
}
