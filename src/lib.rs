//! Bank Ledger Library
//! # Overview
//!
//! This library keeps a small set of accounts together with an append-only
//! journal of every balance-changing event applied to them.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, errors)
//! - [`core`] - Business logic components:
//!   - [`core::account_store`] - Current account state, uniqueness of ids
//!   - [`core::journal`] - Append-only history with per-account queries
//!   - [`core::ledger`] - Orchestration: persist state, then record history
//!   - [`core::replay`] - Rebuilding balances from the journal
//!   - [`core::shared`] - Serialized access for concurrent callers
//! - [`io`] - Persistence backends (pipe-delimited files, in-memory)
//! - [`config`] - File locations
//! - [`cli`] - Command-line parsing and output formatting
//! - [`observability`] - Tracing subscriber setup
//!
//! # Journal Entry Kinds
//!
//! - **ACCOUNT_CREATION**: Account opened; amount is the initial deposit
//! - **DEPOSIT**: Funds credited
//! - **WITHDRAWAL**: Funds debited (never beyond the current balance)
//!
//! # Invariant
//!
//! Replaying an account's entries from its creation amount reproduces every
//! recorded resulting balance, and the last one equals the account's current
//! balance. [`core::Ledger::audit`] checks exactly this.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;
pub mod types;

pub use config::{FileLedger, LedgerConfig};
pub use core::{AccountBackend, JournalBackend, Ledger, Receipt, ReplayReport, SharedLedger};
pub use io::{FileAccountBackend, FileJournalBackend, MemoryAccountBackend, MemoryJournalBackend};
pub use types::{
    parse_amount, Account, AccountId, ErrorKind, LedgerError, Transaction, TransactionKind,
};
