//! Fetch errors

use reqwest::StatusCode;
use thiserror::Error;

/// Reasons a fetch cycle can fail
///
/// The controller collapses all of these into a single failed state; the
/// variants exist for logging and metrics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not complete
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Server answered with a non-2xx status
    #[error("HTTP error: {0}")]
    Http(StatusCode),
    /// Body is not a price snapshot
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label used for the `outcome` metric and log field
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network_error",
            FetchError::Http(_) => "http_error",
            FetchError::Decode(_) => "decode_error",
        }
    }
}
