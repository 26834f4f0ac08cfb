//! Conversions between on-chain integer amounts and display strings.

use alloy::primitives::utils::{format_units, parse_units, ParseUnits};
use alloy::primitives::U256;

use crate::error::{ContractError, Result};

/// Decimals used by the miner token and most collateral tokens.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Scale of values expressed in basis points.
pub const BASIS_POINTS: u64 = 10_000;

/// Format an integer token amount as a decimal string.
///
/// Trailing zeros are trimmed but one fractional digit is always kept,
/// so `10^18` with 18 decimals formats as `"1.0"`.
pub fn format_token_amount(amount: U256, decimals: u8) -> Result<String> {
    let formatted =
        format_units(amount, decimals).map_err(|e| ContractError::Units(e.to_string()))?;
    Ok(trim_fraction(formatted))
}

/// Parse a decimal token amount (e.g. `"1.5"`) into integer units.
pub fn parse_token_amount(amount: &str, decimals: u8) -> Result<U256> {
    match parse_units(amount.trim(), decimals) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => Err(ContractError::Units(format!(
            "negative amount: {}",
            amount
        ))),
        Err(e) => Err(ContractError::Units(format!("{}: {}", amount, e))),
    }
}

/// Format a scaled ratio as a percentage with two decimals.
///
/// `format_percentage(1000, BASIS_POINTS)` yields `"10.00%"`.
pub fn format_percentage(value: u64, scale: u64) -> String {
    if scale == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", value as f64 / scale as f64 * 100.0)
}

fn trim_fraction(formatted: String) -> String {
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, fraction)
            }
        }
        None => format!("{}.0", formatted),
    }
}
