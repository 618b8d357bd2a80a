//! Transaction journal
//!
//! This module provides the `Journal`, the append-only history of every
//! balance-changing event. The journal stamps each entry with the current
//! local time and hands it to a `JournalBackend`; it never rewrites or
//! removes anything.
//!
//! History is read back through `AccountHistory`, a restartable view over one
//! account's entries. Every call to `AccountHistory::iter` starts a fresh lazy
//! pass over the backend, so nothing is buffered between reads.

use crate::core::traits::{JournalBackend, JournalEntries};
use crate::types::{AccountId, LedgerError, Transaction, TransactionKind};
use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;

/// Source of entry timestamps
pub type Clock = fn() -> NaiveDateTime;

/// Current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Append-only journal over a backend
pub struct Journal<J> {
    backend: J,
    clock: Clock,
}

impl<J: JournalBackend> Journal<J> {
    /// Create a journal stamping entries with the local wall clock
    pub fn new(backend: J) -> Self {
        Journal {
            backend,
            clock: local_now,
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Append one entry stamped with the current time
    ///
    /// # Returns
    ///
    /// The entry exactly as it was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend cannot store the entry.
    pub fn append(
        &mut self,
        account_id: &str,
        kind: TransactionKind,
        amount: Decimal,
        resulting_balance: Decimal,
    ) -> Result<Transaction, LedgerError> {
        let entry = Transaction::new((self.clock)(), account_id, kind, amount, resulting_balance);
        self.backend.append(&entry)?;
        Ok(entry)
    }

    /// View one account's history in append order
    ///
    /// An account with no entries (or an unknown id) yields an empty sequence.
    pub fn query_by_account(&self, account_id: &str) -> AccountHistory<'_, J> {
        AccountHistory {
            backend: &self.backend,
            account_id: account_id.to_string(),
        }
    }

    /// Every entry in append order
    pub fn entries(&self) -> Result<JournalEntries<'_>, LedgerError> {
        self.backend.entries()
    }

    /// Borrow the backend
    pub fn backend(&self) -> &J {
        &self.backend
    }
}

/// Restartable view of a single account's journal entries
pub struct AccountHistory<'a, J> {
    backend: &'a J,
    account_id: AccountId,
}

impl<'a, J: JournalBackend> AccountHistory<'a, J> {
    /// The account this view is filtered on
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Start a new lazy pass over the account's entries
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be opened for reading. Faults
    /// hit while reading are yielded as `Err` items.
    pub fn iter(&self) -> Result<HistoryIter<'_>, LedgerError> {
        Ok(HistoryIter {
            entries: self.backend.entries_for(&self.account_id)?,
        })
    }

    /// Collect the account's entries
    pub fn to_vec(&self) -> Result<Vec<Transaction>, LedgerError> {
        self.iter()?.collect()
    }
}

/// Iterator over one account's entries
pub struct HistoryIter<'a> {
    entries: JournalEntries<'a>,
}

impl Iterator for HistoryIter<'_> {
    type Item = Result<Transaction, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }
}
