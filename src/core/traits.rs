//! Persistence backend traits
//!
//! The account store and the journal never touch files directly. They talk to
//! a backend through these traits, so the same ledger logic runs over the
//! pipe-delimited files in production and over in-memory vectors in tests.

use crate::types::{Account, LedgerError, Transaction};

/// Lazily produced journal entries, in append order
pub type JournalEntries<'a> = Box<dyn Iterator<Item = Result<Transaction, LedgerError>> + 'a>;

/// Storage for the current state of every account
pub trait AccountBackend {
    /// Load every persisted account in storage order
    fn load_all(&self) -> Result<Vec<Account>, LedgerError>;

    /// Replace the whole persisted collection
    ///
    /// Must be all-or-nothing: on error the previously persisted collection
    /// is still intact.
    fn replace_all(&mut self, accounts: &[Account]) -> Result<(), LedgerError>;
}

/// Append-only storage for journal entries
pub trait JournalBackend {
    /// Append one entry
    ///
    /// Entries from separate calls must never interleave.
    fn append(&mut self, entry: &Transaction) -> Result<(), LedgerError>;

    /// Read every entry from the start, lazily
    ///
    /// Each call starts a fresh pass over the journal.
    fn entries(&self) -> Result<JournalEntries<'_>, LedgerError>;

    /// Read one account's entries from the start, lazily
    ///
    /// Faults on other accounts' entries must not surface here. The default
    /// filters decoded entries, which suits backends that cannot hold
    /// undecodable entries; file-backed journals match on the raw account
    /// field before decoding.
    fn entries_for<'a>(&'a self, account_id: &'a str) -> Result<JournalEntries<'a>, LedgerError> {
        let entries = self.entries()?;
        Ok(Box::new(entries.filter(move |entry| match entry {
            Ok(entry) => entry.account_id == account_id,
            Err(_) => true,
        })))
    }
}
