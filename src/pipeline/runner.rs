//! Stage runner - drives the fetch/resolve pipeline across patterns
//!
//! The runner threads the link set through the stages: the output set of
//! stage *i* is the input set of stage *i+1*. Stages never overlap, but
//! within a stage the per-address fetches run concurrently behind an
//! order-preserving buffered stream, so the output ordering is
//! deterministic regardless of completion order.

use crate::pipeline::fetcher::fetch_page;
use crate::pipeline::resolver::matching_links;
use crate::url::parse_address;
use crate::Result;
use futures::{stream, StreamExt};
use regex::Regex;
use reqwest::Client;
use std::collections::HashSet;

/// Fetches one address and resolves its matching links
async fn expand_address(client: &Client, address: &str, pattern: &Regex) -> Result<Vec<String>> {
    let base = parse_address(address)?;
    let body = fetch_page(client, &base).await?;
    matching_links(&body, &base, pattern)
}

/// Runs the staged discovery pipeline over the seed set
///
/// For each pattern in order, every address in the current set is fetched
/// and its matching links resolved; the per-address lists are concatenated
/// in input order and become the next set. An empty pattern list returns
/// the seed set unchanged.
///
/// # Failure Policy
///
/// An address that cannot be fetched or parsed is skipped: the failure is
/// logged at warn level and the stage continues with the remaining
/// addresses. Only pattern compilation, which happens before this function
/// is called, is fatal.
///
/// # Deduplication
///
/// Duplicate links are collapsed to their first occurrence at each stage
/// boundary, so repeated hrefs do not multiply fetch work across stages.
///
/// # Arguments
///
/// * `client` - The HTTP client for all fetches
/// * `seeds` - The initial address set (already absolute)
/// * `patterns` - Compiled stage patterns, applied in order
/// * `max_concurrent` - Bound on concurrent fetches within a stage
///
/// # Returns
///
/// The final link set after the last stage
pub async fn run_stages(
    client: &Client,
    seeds: Vec<String>,
    patterns: &[Regex],
    max_concurrent: usize,
) -> Vec<String> {
    let mut current = seeds;

    for (index, pattern) in patterns.iter().enumerate() {
        tracing::info!(
            "Stage {}/{}: pattern '{}' over {} address(es)",
            index + 1,
            patterns.len(),
            pattern,
            current.len()
        );

        // buffered (not buffer_unordered) keeps results in input order
        let outcomes: Vec<_> = stream::iter(current.iter().map(|address| async move {
            tracing::debug!("Fetching {}", address);
            (address.as_str(), expand_address(client, address, pattern).await)
        }))
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

        let mut next = Vec::new();
        let mut seen = HashSet::new();
        for (address, outcome) in outcomes {
            match outcome {
                Ok(links) => {
                    tracing::debug!("{}: {} matching link(s)", address, links.len());
                    for link in links {
                        if seen.insert(link.clone()) {
                            next.push(link);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", address, e);
                }
            }
        }

        tracing::info!("Stage {} produced {} address(es)", index + 1, next.len());
        current = next;
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::fetcher::build_http_client;
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_patterns_is_identity() {
        // No patterns means no stages run and no requests are issued
        let client = build_http_client(Duration::from_secs(1)).unwrap();
        let seeds = vec![
            "http://example.com/a.html".to_string(),
            "http://example.com/b.html".to_string(),
        ];

        let result = run_stages(&client, seeds.clone(), &[], 4).await;
        assert_eq!(result, seeds);
    }

    // Stage behavior against live pages is covered by the wiremock tests
    // in tests/stage_tests.rs
}
