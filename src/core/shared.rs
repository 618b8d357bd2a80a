//! Thread-safe ledger handle
//!
//! `SharedLedger` serializes every operation behind one mutex that covers the
//! account store and the journal together. Two concurrent mutations of the
//! same account therefore always see each other's result, and journal appends
//! can never interleave.

use crate::core::ledger::{Ledger, Receipt};
use crate::core::replay::ReplayReport;
use crate::core::traits::{AccountBackend, JournalBackend};
use crate::types::{Account, LedgerError, Transaction};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle to a ledger shared between threads
pub struct SharedLedger<A, J> {
    inner: Arc<Mutex<Ledger<A, J>>>,
}

impl<A, J> Clone for SharedLedger<A, J> {
    fn clone(&self) -> Self {
        SharedLedger {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: AccountBackend, J: JournalBackend> SharedLedger<A, J> {
    /// Wrap a ledger for shared use
    pub fn new(ledger: Ledger<A, J>) -> Self {
        SharedLedger {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ledger<A, J>>, LedgerError> {
        self.inner
            .lock()
            .map_err(|_| LedgerError::storage_fault("ledger lock poisoned"))
    }

    pub fn create_account(
        &self,
        id: &str,
        holder: &str,
        initial_deposit: Decimal,
    ) -> Result<Receipt<Account>, LedgerError> {
        self.lock()?.create_account(id, holder, initial_deposit)
    }

    pub fn deposit(&self, id: &str, amount: Decimal) -> Result<Receipt<Decimal>, LedgerError> {
        self.lock()?.deposit(id, amount)
    }

    pub fn withdraw(&self, id: &str, amount: Decimal) -> Result<Receipt<Decimal>, LedgerError> {
        self.lock()?.withdraw(id, amount)
    }

    pub fn get_balance(&self, id: &str) -> Result<(String, Decimal), LedgerError> {
        self.lock()?.get_balance(id)
    }

    /// Snapshot of all accounts in insertion order
    pub fn list_accounts(&self) -> Result<Vec<Account>, LedgerError> {
        Ok(self.lock()?.list_accounts().cloned().collect())
    }

    /// Snapshot of one account's history
    ///
    /// The lock cannot outlive the call, so entries are collected eagerly.
    pub fn query_by_account(&self, id: &str) -> Result<Vec<Transaction>, LedgerError> {
        self.lock()?.query_by_account(id).to_vec()
    }

    pub fn audit(&self, id: &str) -> Result<ReplayReport, LedgerError> {
        self.lock()?.audit(id)
    }
}
