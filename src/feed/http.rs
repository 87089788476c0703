//! HTTP price source
//!
//! Issues a bare `GET` against the currency endpoint and decodes the body as
//! a [`PriceSnapshot`]. No query parameters, headers or authentication.

use super::{FetchError, PriceSnapshot, PriceSource};
use crate::config::FeedConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Currency endpoint served by the price worker
pub const DEFAULT_ENDPOINT: &str = "https://sierrabravo.hssdbrv.workers.dev/api/currency";

/// Price source backed by a fixed HTTP endpoint
pub struct HttpPriceSource {
    endpoint: String,
    client: Client,
}

impl HttpPriceSource {
    /// Create a source for the default endpoint
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(&FeedConfig::default())
    }

    /// Create a source from feed configuration
    pub fn with_config(config: &FeedConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    /// Configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch(&self) -> Result<PriceSnapshot, FetchError> {
        tracing::debug!(url = %self.endpoint, "Fetching price snapshot");

        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = %status, body = %body, "Price endpoint returned error");
            return Err(FetchError::Http(status));
        }

        let body = response.bytes().await?;
        let snapshot: PriceSnapshot = serde_json::from_slice(&body)?;

        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
