//! I/O module
//!
//! Persistence backends for the ledger.
//!
//! # Components
//!
//! - `record_format` - Pipe-delimited record layout (encode/decode)
//! - `account_file` - Accounts file with atomic whole-file replacement
//! - `journal_file` - Append-only journal file with streaming reads
//! - `memory` - In-memory backends for tests

pub mod account_file;
pub mod journal_file;
pub mod memory;
pub mod record_format;

pub use account_file::FileAccountBackend;
pub use journal_file::FileJournalBackend;
pub use memory::{MemoryAccountBackend, MemoryJournalBackend};
