//! In-memory backends
//!
//! Intended for tests and benchmarks. Nothing survives the process.

use crate::core::traits::{AccountBackend, JournalBackend, JournalEntries};
use crate::types::{Account, LedgerError, Transaction};

/// Account backend holding the persisted collection in a vector
#[derive(Debug, Clone, Default)]
pub struct MemoryAccountBackend {
    accounts: Vec<Account>,
}

impl MemoryAccountBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted collection
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        MemoryAccountBackend { accounts }
    }

    /// Copy of what is currently persisted
    pub fn snapshot(&self) -> Vec<Account> {
        self.accounts.clone()
    }
}

impl AccountBackend for MemoryAccountBackend {
    fn load_all(&self) -> Result<Vec<Account>, LedgerError> {
        Ok(self.accounts.clone())
    }

    fn replace_all(&mut self, accounts: &[Account]) -> Result<(), LedgerError> {
        self.accounts = accounts.to_vec();
        Ok(())
    }
}

/// Journal backend appending to a vector
#[derive(Debug, Clone, Default)]
pub struct MemoryJournalBackend {
    entries: Vec<Transaction>,
}

impl MemoryJournalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every appended entry
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.entries.clone()
    }
}

impl JournalBackend for MemoryJournalBackend {
    fn append(&mut self, entry: &Transaction) -> Result<(), LedgerError> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn entries(&self) -> Result<JournalEntries<'_>, LedgerError> {
        Ok(Box::new(
            self.entries
                .iter()
                .cloned()
                .map(Ok::<Transaction, LedgerError>),
        ))
    }
}
