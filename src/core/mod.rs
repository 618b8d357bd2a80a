//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Persistence backend abstractions
//! - `account_store` - Account state and identifier uniqueness
//! - `journal` - Append-only transaction history
//! - `replay` - Rebuilding balances from the journal
//! - `ledger` - Orchestration of store and journal
//! - `shared` - Mutex-guarded handle for concurrent callers

pub mod account_store;
pub mod journal;
pub mod ledger;
pub mod replay;
pub mod shared;
pub mod traits;

pub use account_store::AccountStore;
pub use journal::{local_now, AccountHistory, Clock, HistoryIter, Journal};
pub use ledger::{Ledger, Receipt};
pub use replay::{replay, ReplayReport};
pub use shared::SharedLedger;
pub use traits::{AccountBackend, JournalBackend, JournalEntries};
