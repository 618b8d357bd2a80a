//! Transaction-related types for the bank ledger
//!
//! This module defines journal entry kinds and the immutable journal entry
//! recorded for every balance-changing event.

use super::account::AccountId;
use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used in the journal file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Kinds of balance-changing events recorded in the journal
///
/// The persisted tokens are the upper-case names (`ACCOUNT_CREATION`,
/// `DEPOSIT`, `WITHDRAWAL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Account opened with its initial deposit
    ///
    /// Always the first entry of an account. Its amount is the opening balance.
    AccountCreation,

    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    Withdrawal,
}

impl TransactionKind {
    /// The literal token written to the journal file
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::AccountCreation => "ACCOUNT_CREATION",
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable journal entry
///
/// Created exactly once per successful account store mutation and never
/// updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Local time the entry was recorded, second resolution
    pub timestamp: NaiveDateTime,

    /// The account this entry belongs to
    pub account_id: AccountId,

    /// What kind of event this is
    pub kind: TransactionKind,

    /// Magnitude of the event (never negative)
    pub amount: Decimal,

    /// Account balance immediately after the event
    pub resulting_balance: Decimal,
}

impl Transaction {
    /// Build a journal entry, truncating the timestamp to whole seconds
    pub fn new(
        timestamp: NaiveDateTime,
        account_id: impl Into<AccountId>,
        kind: TransactionKind,
        amount: Decimal,
        resulting_balance: Decimal,
    ) -> Self {
        Transaction {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            account_id: account_id.into(),
            kind,
            amount,
            resulting_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    #[case::creation(TransactionKind::AccountCreation, "ACCOUNT_CREATION")]
    #[case::deposit(TransactionKind::Deposit, "DEPOSIT")]
    #[case::withdrawal(TransactionKind::Withdrawal, "WITHDRAWAL")]
    fn test_kind_tokens(#[case] kind: TransactionKind, #[case] token: &str) {
        assert_eq!(kind.to_string(), token);
        assert_eq!(kind.as_str(), token);
    }

    #[test]
    fn test_timestamp_truncated_to_seconds() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_milli_opt(9, 30, 15, 750)
            .unwrap();
        let tx = Transaction::new(
            at,
            "A1",
            TransactionKind::Deposit,
            Decimal::ONE,
            Decimal::ONE,
        );
        assert_eq!(
            tx.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            "2024-03-01 09:30:15"
        );
        assert_eq!(tx.timestamp.nanosecond(), 0);
    }
}
