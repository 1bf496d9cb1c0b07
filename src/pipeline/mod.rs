//! Pipeline module for staged link discovery
//!
//! This module contains the three pipeline components:
//! - Page fetching over HTTP
//! - Anchor extraction, pattern filtering, and href resolution
//! - The stage runner that threads link sets through the patterns

mod fetcher;
mod resolver;
mod runner;

pub use fetcher::{build_http_client, fetch_page};
pub use resolver::matching_links;
pub use runner::run_stages;

use crate::config::{compile_patterns, RunConfig};
use crate::url::parse_address;
use crate::Result;

/// Runs a complete discovery pipeline from a [`RunConfig`]
///
/// This is the main entry point for callers. It will:
/// 1. Compile and validate every pattern (fatal on the first bad one)
/// 2. Validate the seed address
/// 3. Build the HTTP client
/// 4. Run one stage per pattern, threading the link set through
///
/// # Arguments
///
/// * `config` - The run configuration
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The final link set, every entry absolute
/// * `Err(StageError)` - Invalid pattern, invalid seed, or client failure
pub async fn discover(config: &RunConfig) -> Result<Vec<String>> {
    let patterns = compile_patterns(&config.patterns)?;
    let seed = parse_address(&config.start_url)?;
    let client = build_http_client(config.timeout)?;

    Ok(run_stages(&client, vec![seed.to_string()], &patterns, config.max_concurrent).await)
}
