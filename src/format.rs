//! Money formatting

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use thiserror::Error;

/// Formatting errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Input text is not a decimal number
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Render an amount as `$` followed by exactly two decimals.
///
/// Rounds half away from zero. No thousands separators; negative amounts
/// keep their sign after the dollar symbol (`$-5.00`).
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Like [`format_money`], for amounts held as text
pub fn format_money_str(amount: &str) -> Result<String, FormatError> {
    let trimmed = amount.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| FormatError::InvalidAmount(amount.to_string()))?;
    Ok(format_money(value))
}
