//! Error types for the bank ledger
//!
//! Every ledger operation returns a `LedgerError` on failure. None of them are
//! fatal: the caller reports the error and carries on.
//!
//! # Error Categories
//!
//! - **Input Errors**: malformed or out-of-range amounts, unusable identifiers
//! - **Account Errors**: duplicate account, unknown account, insufficient funds
//! - **Storage Errors**: I/O failures and unreadable persisted records
//! - **Audit Errors**: journal history that does not reproduce a balance

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is malformed or outside the range the operation accepts
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The rejected amount, as given
        amount: String,
    },

    /// Account identifier cannot be stored
    #[error("Invalid account id '{id}': {reason}")]
    InvalidAccountId {
        /// The rejected identifier
        id: String,
        /// Why it was rejected
        reason: String,
    },

    /// Holder name cannot be stored
    #[error("Invalid holder name '{holder}': must not contain '|' or line breaks")]
    InvalidHolder {
        /// The rejected holder name
        holder: String,
    },

    /// An account with this identifier already exists
    #[error("Account {id} already exists")]
    DuplicateAccount {
        /// The duplicated identifier
        id: String,
    },

    /// No account with this identifier exists
    #[error("Account {id} not found")]
    AccountNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// Withdrawal exceeds the current balance
    ///
    /// The account and the journal are left unchanged.
    #[error("Insufficient funds in account {id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account identifier
        id: String,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Balance arithmetic would overflow the decimal range
    #[error("Arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        id: String,
    },

    /// Reading or writing persisted records failed
    #[error("Storage fault: {message}")]
    StorageFault {
        /// Description of the underlying failure
        message: String,
    },

    /// A persisted record has the right shape but unreadable content
    #[error("Corrupt record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CorruptRecord {
        /// Line number in the backing file (if known)
        line: Option<u64>,
        /// What could not be read
        message: String,
    },

    /// Replaying the journal does not reproduce the recorded balances
    #[error("Journal mismatch for account {id}: {message}")]
    JournalMismatch {
        /// Account identifier
        id: String,
        /// Where replay diverged
        message: String,
    },
}

/// Coarse error classification callers can match on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidAmount,
    InvalidInput,
    DuplicateAccount,
    AccountNotFound,
    InsufficientFunds,
    StorageFault,
    JournalMismatch,
}

impl LedgerError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InvalidAmount { .. } | LedgerError::ArithmeticOverflow { .. } => {
                ErrorKind::InvalidAmount
            }
            LedgerError::InvalidAccountId { .. } | LedgerError::InvalidHolder { .. } => {
                ErrorKind::InvalidInput
            }
            LedgerError::DuplicateAccount { .. } => ErrorKind::DuplicateAccount,
            LedgerError::AccountNotFound { .. } => ErrorKind::AccountNotFound,
            LedgerError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            LedgerError::StorageFault { .. } | LedgerError::CorruptRecord { .. } => {
                ErrorKind::StorageFault
            }
            LedgerError::JournalMismatch { .. } => ErrorKind::JournalMismatch,
        }
    }
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::StorageFault {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        LedgerError::StorageFault {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: impl ToString) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InvalidAccountId error
    pub fn invalid_account_id(id: &str, reason: &str) -> Self {
        LedgerError::InvalidAccountId {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(id: &str) -> Self {
        LedgerError::DuplicateAccount { id: id.to_string() }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        LedgerError::AccountNotFound { id: id.to_string() }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(id: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            id: id.to_string(),
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a StorageFault error
    pub fn storage_fault(message: impl Into<String>) -> Self {
        LedgerError::StorageFault {
            message: message.into(),
        }
    }

    /// Create a CorruptRecord error without a line number
    pub fn corrupt_record(message: impl Into<String>) -> Self {
        LedgerError::CorruptRecord {
            line: None,
            message: message.into(),
        }
    }

    /// Attach a line number to a CorruptRecord error; other errors pass through
    pub fn at_line(self, line: u64) -> Self {
        match self {
            LedgerError::CorruptRecord { message, .. } => LedgerError::CorruptRecord {
                line: Some(line),
                message,
            },
            other => other,
        }
    }

    /// Create a JournalMismatch error
    pub fn journal_mismatch(id: &str, message: impl Into<String>) -> Self {
        LedgerError::JournalMismatch {
            id: id.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: "-5".to_string() },
        "Invalid amount '-5'"
    )]
    #[case::duplicate_account(
        LedgerError::DuplicateAccount { id: "A1".to_string() },
        "Account A1 already exists"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { id: "Z9".to_string() },
        "Account Z9 not found"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { id: "A1".to_string(), balance: Decimal::new(15000, 2), requested: Decimal::new(20000, 2) },
        "Insufficient funds in account A1: balance 150.00, requested 200.00"
    )]
    #[case::storage_fault(
        LedgerError::StorageFault { message: "disk full".to_string() },
        "Storage fault: disk full"
    )]
    #[case::corrupt_record_with_line(
        LedgerError::CorruptRecord { line: Some(3), message: "bad balance".to_string() },
        "Corrupt record at line 3: bad balance"
    )]
    #[case::corrupt_record_without_line(
        LedgerError::CorruptRecord { line: None, message: "bad balance".to_string() },
        "Corrupt record: bad balance"
    )]
    #[case::journal_mismatch(
        LedgerError::JournalMismatch { id: "A1".to_string(), message: "no entries".to_string() },
        "Journal mismatch for account A1: no entries"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(LedgerError::invalid_amount("x"), ErrorKind::InvalidAmount)]
    #[case::overflow(LedgerError::arithmetic_overflow("deposit", "A1"), ErrorKind::InvalidAmount)]
    #[case::invalid_id(LedgerError::invalid_account_id("", "must not be empty"), ErrorKind::InvalidInput)]
    #[case::duplicate(LedgerError::duplicate_account("A1"), ErrorKind::DuplicateAccount)]
    #[case::not_found(LedgerError::account_not_found("A1"), ErrorKind::AccountNotFound)]
    #[case::insufficient(
        LedgerError::insufficient_funds("A1", Decimal::ZERO, Decimal::ONE),
        ErrorKind::InsufficientFunds
    )]
    #[case::storage(LedgerError::storage_fault("boom"), ErrorKind::StorageFault)]
    #[case::corrupt(LedgerError::corrupt_record("boom"), ErrorKind::StorageFault)]
    #[case::mismatch(LedgerError::journal_mismatch("A1", "boom"), ErrorKind::JournalMismatch)]
    fn test_error_kind(#[case] error: LedgerError, #[case] expected: ErrorKind) {
        assert_eq!(error.kind(), expected);
    }

    #[test]
    fn test_at_line_only_touches_corrupt_records() {
        let corrupt = LedgerError::corrupt_record("bad").at_line(7);
        assert_eq!(
            corrupt,
            LedgerError::CorruptRecord {
                line: Some(7),
                message: "bad".to_string()
            }
        );

        let other = LedgerError::account_not_found("A1").at_line(7);
        assert_eq!(other, LedgerError::account_not_found("A1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::StorageFault { .. }));
        assert_eq!(error.to_string(), "Storage fault: Permission denied");
    }
}
