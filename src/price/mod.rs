//! Price fetching module
//!
//! Fetches the current BTC/USD rate and converts it to CAD

mod coindesk;
mod types;

pub use coindesk::{CoinDeskClient, CoinDeskConfig, COINDESK_API_URL};
pub use types::{usd_to_cad, FetchError, PriceQuote, EXCHANGE_RATE};

use async_trait::async_trait;

/// Trait for price source implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch a fresh quote. Every call is one independent request.
    async fn fetch(&self) -> Result<PriceQuote, FetchError>;
}
