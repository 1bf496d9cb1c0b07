//! HTTP fetcher implementation
//!
//! Thin wrapper over reqwest: build a client once, then fetch page bodies
//! as text. All policy (skip vs. abort on failure) lives in the stage
//! runner, not here.

use crate::StageError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the HTTP client used for every fetch in a run
///
/// # Arguments
///
/// * `timeout` - Per-request timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    let user_agent = format!("linkstage/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the page at `url` and returns its body as text
///
/// A non-2xx status is a fetch failure; the body is only read on success.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The absolute address to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(StageError)` - Transport failure or non-success status
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, StageError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| StageError::Fetch {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(StageError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| StageError::Fetch {
        url: url.to_string(),
        source: e,
    })
}
