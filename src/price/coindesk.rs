//! CoinDesk current-price client
//!
//! Issues one GET to the CoinDesk BPI endpoint per fetch and reads the USD
//! rate and the upstream update time out of the JSON body.

use super::{FetchError, PriceQuote, PriceSource};
use crate::telemetry;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::{Duration, Instant};

/// CoinDesk BPI endpoint
pub const COINDESK_API_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice.json";

/// Configuration for the CoinDesk client
#[derive(Debug, Clone)]
pub struct CoinDeskConfig {
    /// Full URL of the current-price endpoint
    pub api_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CoinDeskConfig {
    fn default() -> Self {
        Self {
            api_url: COINDESK_API_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the CoinDesk current-price API
pub struct CoinDeskClient {
    config: CoinDeskConfig,
    client: Client,
}

impl CoinDeskClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_config(CoinDeskConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: CoinDeskConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Endpoint this client queries
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    async fn fetch_body(&self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.config.api_url, "Fetching Bitcoin price");

        let response = self.client.get(&self.config.api_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // The body still goes through the parser; a non-JSON error page
            // surfaces as a parse failure.
            tracing::debug!(%status, "Price API returned non-success status");
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl PriceSource for CoinDeskClient {
    async fn fetch(&self) -> Result<PriceQuote, FetchError> {
        let started = Instant::now();
        let result = self.fetch_body().await.and_then(|body| parse_body(&body));

        match &result {
            Ok(quote) => {
                telemetry::record_fetch_latency(started.elapsed());
                tracing::debug!(
                    usd = %quote.usd_price,
                    cad = %quote.cad_price,
                    updated_at = %quote.updated_at,
                    "Fetched Bitcoin price"
                );
            }
            Err(e) => telemetry::record_fetch_failure(e.kind()),
        }

        result
    }
}

/// `currentprice.json` response, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct CurrentPriceResponse {
    time: CoinDeskTime,
    bpi: CoinDeskBpi,
}

#[derive(Debug, Deserialize)]
struct CoinDeskTime {
    /// Human-readable update time, e.g. "Jan 1, 2024 00:00:00 UTC"
    updated: String,
}

#[derive(Debug, Deserialize)]
struct CoinDeskBpi {
    #[serde(rename = "USD")]
    usd: CoinDeskRate,
}

#[derive(Debug, Deserialize)]
struct CoinDeskRate {
    rate_float: Decimal,
}

/// Parse a response body into a quote
fn parse_body(body: &str) -> Result<PriceQuote, FetchError> {
    let response: CurrentPriceResponse = serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "Price response did not match expected schema");
        FetchError::Parse
    })?;

    PriceQuote::from_usd(response.bpi.usd.rate_float, response.time.updated).ok_or_else(|| {
        tracing::debug!("Price rate out of range for CAD conversion");
        FetchError::Parse
    })
}
