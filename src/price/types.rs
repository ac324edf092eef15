//! Price quote types

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

/// USD to CAD conversion rate.
///
/// Fixed at build time and NOT market accurate. Replies must keep using this
/// value so CAD figures stay consistent with what users have always seen.
pub const EXCHANGE_RATE: Decimal = dec!(1.36);

/// Errors from a single price fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure reaching the price API
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body did not match the expected shape
    #[error("Error parsing Bitcoin data.")]
    Parse,
}

impl FetchError {
    /// Short label for metrics and structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Parse => "parse",
        }
    }
}

/// A single Bitcoin price snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    /// Upstream USD rate
    pub usd_price: Decimal,
    /// USD rate converted with [`EXCHANGE_RATE`], 2 decimal places
    pub cad_price: Decimal,
    /// Upstream update time, verbatim
    pub updated_at: String,
}

impl PriceQuote {
    /// Build a quote from a USD rate, deriving the CAD price.
    /// `None` when the conversion overflows.
    pub fn from_usd(usd_price: Decimal, updated_at: impl Into<String>) -> Option<Self> {
        Some(Self {
            usd_price,
            cad_price: usd_to_cad(usd_price)?,
            updated_at: updated_at.into(),
        })
    }
}

/// Convert USD to CAD at the fixed rate, rounded half-up to cents.
/// `None` when the product does not fit in a `Decimal`.
pub fn usd_to_cad(usd: Decimal) -> Option<Decimal> {
    usd.checked_mul(EXCHANGE_RATE)
        .map(|cad| cad.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
