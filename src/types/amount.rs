//! Decimal amount parsing
//!
//! Amounts are `rust_decimal::Decimal` throughout the crate. Text coming from
//! callers or from persisted records goes through `parse_decimal`, which also
//! accepts the exponent notation some writers produce for very small values
//! (`1e-05`).

use super::error::LedgerError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal number, accepting plain and scientific notation
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Parse a caller-supplied amount
///
/// Only well-formedness is checked here; sign rules depend on the operation
/// and are enforced by the ledger.
///
/// # Errors
///
/// Returns `LedgerError::InvalidAmount` for empty or malformed input.
pub fn parse_amount(text: &str) -> Result<Decimal, LedgerError> {
    parse_decimal(text).ok_or_else(|| LedgerError::invalid_amount(text))
}
