//! Account-related types for the bank ledger
//!
//! This module defines the Account structure and the field validation shared
//! by every operation that introduces a new account identifier or holder name.

use super::error::LedgerError;
use rust_decimal::Decimal;

/// Account identifier
///
/// Assigned by the caller at creation and immutable afterwards.
pub type AccountId = String;

/// Current state of a single account
///
/// The account store keeps one of these per account. It is a materialized
/// cache of the balance that the journal can reproduce by replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique account identifier
    pub id: AccountId,

    /// Account holder name (free text)
    pub holder: String,

    /// Current balance
    ///
    /// Never negative. Only deposits and withdrawals change it after creation.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with the given opening balance
    ///
    /// # Arguments
    ///
    /// * `id` - The account identifier
    /// * `holder` - The account holder name
    /// * `balance` - Opening balance (the initial deposit)
    pub fn new(id: impl Into<AccountId>, holder: impl Into<String>, balance: Decimal) -> Self {
        Account {
            id: id.into(),
            holder: holder.into(),
            balance,
        }
    }
}

/// Characters that cannot appear inside a persisted field
const FORBIDDEN: [char; 3] = ['|', '\n', '\r'];

/// Validate an account identifier
///
/// Identifiers must be non-empty and must not contain the record delimiter
/// or a line break.
pub fn validate_account_id(id: &str) -> Result<(), LedgerError> {
    if id.is_empty() {
        return Err(LedgerError::invalid_account_id(id, "must not be empty"));
    }
    if id.contains(FORBIDDEN) {
        return Err(LedgerError::invalid_account_id(
            id,
            "must not contain '|' or line breaks",
        ));
    }
    Ok(())
}

/// Validate an account holder name
///
/// Holder names may be empty (free text) but share the delimiter restriction.
pub fn validate_holder(holder: &str) -> Result<(), LedgerError> {
    if holder.contains(FORBIDDEN) {
        return Err(LedgerError::InvalidHolder {
            holder: holder.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("A1")]
    #[case::with_spaces("savings 01")]
    #[case::unicode("konto-ø")]
    fn test_valid_account_ids(#[case] id: &str) {
        assert!(validate_account_id(id).is_ok());
    }

    #[rstest]
    #[case::empty("")]
    #[case::pipe("A|1")]
    #[case::newline("A\n1")]
    #[case::carriage_return("A\r")]
    fn test_invalid_account_ids(#[case] id: &str) {
        assert!(matches!(
            validate_account_id(id),
            Err(LedgerError::InvalidAccountId { .. })
        ));
    }

    #[test]
    fn test_holder_may_be_empty_but_not_delimited() {
        assert!(validate_holder("").is_ok());
        assert!(validate_holder("Jane Doe").is_ok());
        assert!(matches!(
            validate_holder("Jane|Doe"),
            Err(LedgerError::InvalidHolder { .. })
        ));
    }

    #[test]
    fn test_new_account() {
        let account = Account::new("A1", "Jane", Decimal::new(10000, 2));
        assert_eq!(account.id, "A1");
        assert_eq!(account.holder, "Jane");
        assert_eq!(account.balance, Decimal::new(10000, 2));
    }
}
