//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account state and field validation
//! - `transaction`: Journal entries and their kinds
//! - `amount`: Decimal amount parsing
//! - `error`: Error types for the ledger

pub mod account;
pub mod amount;
pub mod error;
pub mod transaction;

pub use account::{validate_account_id, validate_holder, Account, AccountId};
pub use amount::{parse_amount, parse_decimal};
pub use error::{ErrorKind, LedgerError};
pub use transaction::{Transaction, TransactionKind, TIMESTAMP_FORMAT};
