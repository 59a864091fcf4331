//! HTTP client for the configured store feed endpoints.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::FeedError;

/// Fetches feed documents from admin-configured endpoints.
///
/// Deliberately minimal: one GET per feed, no authentication, no retries,
/// no pagination. Non-success statuses and unparseable bodies surface as
/// typed errors so the orchestrator can report them per store without
/// aborting a batch.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a `FeedClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one feed document and parses the body as JSON.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] — transport failure or timeout.
    /// - [`FeedError::UnexpectedStatus`] — any non-2xx status.
    /// - [`FeedError::Deserialize`] — body is not valid JSON.
    pub async fn fetch_feed(&self, url: &str) -> Result<Value, FeedError> {
        tracing::debug!(url, "fetching feed document");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FeedError::Deserialize {
            context: format!("feed body from {url}"),
            source: e,
        })
    }
}
