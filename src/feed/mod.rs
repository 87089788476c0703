//! Price feed module
//!
//! Fetches the current gold/tether snapshot from the remote price endpoint

mod error;
mod http;
mod types;

pub use error::FetchError;
pub use http::{HttpPriceSource, DEFAULT_ENDPOINT};
pub use types::{PriceQuote, PriceSnapshot, Trend};

use async_trait::async_trait;

/// Trait for price source implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Run one fetch cycle against the source
    async fn fetch(&self) -> Result<PriceSnapshot, FetchError>;

    /// Where the source fetches from, for logging
    fn describe(&self) -> String;
}
