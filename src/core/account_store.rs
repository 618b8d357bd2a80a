//! Account store module
//!
//! This module provides the `AccountStore`, which keeps the current state of
//! every account and persists it through an `AccountBackend`.
//!
//! The AccountStore is responsible for:
//! - Loading accounts once when the store is opened
//! - Keeping an insertion-ordered index from account id to account
//! - Enforcing uniqueness of account identifiers
//! - Writing the full collection back to the backend on every mutation
//!
//! The in-memory index is the source of truth for the session. A mutation is
//! applied in memory, flushed to the backend, and reverted if the flush fails,
//! so memory and storage never disagree after a call returns.

use crate::core::traits::AccountBackend;
use crate::types::{Account, AccountId, LedgerError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Insertion-ordered account state backed by a persistence backend
pub struct AccountStore<B> {
    backend: B,
    /// Accounts in insertion order
    accounts: Vec<Account>,
    /// Map of account id to slot in `accounts`
    index: HashMap<AccountId, usize>,
}

impl<B: AccountBackend> AccountStore<B> {
    /// Open a store over a backend, loading every persisted account
    ///
    /// If the backend holds the same id more than once, the first record wins
    /// and later ones are dropped with a warning. They disappear from storage
    /// at the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn open(backend: B) -> Result<Self, LedgerError> {
        let loaded = backend.load_all()?;

        let mut accounts = Vec::with_capacity(loaded.len());
        let mut index = HashMap::with_capacity(loaded.len());
        for account in loaded {
            if index.contains_key(&account.id) {
                warn!(account = %account.id, "dropping duplicate account record");
                continue;
            }
            index.insert(account.id.clone(), accounts.len());
            accounts.push(account);
        }

        debug!(count = accounts.len(), "loaded accounts");
        Ok(AccountStore {
            backend,
            accounts,
            index,
        })
    }

    /// Look up an account by id
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.index.get(id).map(|&slot| &self.accounts[slot])
    }

    /// Check whether an account exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Insert a new account and persist the collection
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An account with the same id already exists (nothing is written)
    /// - The backend write fails (the store is left unchanged)
    pub fn insert(&mut self, account: Account) -> Result<&Account, LedgerError> {
        if self.contains(&account.id) {
            return Err(LedgerError::duplicate_account(&account.id));
        }

        let slot = self.accounts.len();
        self.accounts.push(account);

        if let Err(e) = self.backend.replace_all(&self.accounts) {
            self.accounts.pop();
            return Err(e);
        }

        let id = self.accounts[slot].id.clone();
        self.index.insert(id, slot);
        Ok(&self.accounts[slot])
    }

    /// Set the balance of an existing account and persist the collection
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The backend write fails (the previous balance is restored)
    pub fn set_balance(&mut self, id: &str, balance: Decimal) -> Result<(), LedgerError> {
        let slot = *self
            .index
            .get(id)
            .ok_or_else(|| LedgerError::account_not_found(id))?;

        let previous = std::mem::replace(&mut self.accounts[slot].balance, balance);

        if let Err(e) = self.backend.replace_all(&self.accounts) {
            self.accounts[slot].balance = previous;
            return Err(e);
        }

        Ok(())
    }

    /// Borrow the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemoryAccountBackend;

    /// Backend that refuses every write
    struct ReadOnlyBackend(Vec<Account>);

    impl AccountBackend for ReadOnlyBackend {
        fn load_all(&self) -> Result<Vec<Account>, LedgerError> {
            Ok(self.0.clone())
        }

        fn replace_all(&mut self, _accounts: &[Account]) -> Result<(), LedgerError> {
            Err(LedgerError::storage_fault("read-only"))
        }
    }

    fn account(id: &str, balance: i64) -> Account {
        Account::new(id, format!("holder {}", id), Decimal::new(balance, 2))
    }

    #[test]
    fn test_open_empty_backend() {
        let store = AccountStore::open(MemoryAccountBackend::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get("A1").is_none());
    }

    #[test]
    fn test_open_keeps_storage_order() {
        let backend =
            MemoryAccountBackend::with_accounts(vec![account("B", 1), account("A", 2), account("C", 3)]);
        let store = AccountStore::open(backend).unwrap();

        let ids: Vec<&str> = store.accounts().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_open_drops_duplicate_ids_first_wins() {
        let backend = MemoryAccountBackend::with_accounts(vec![
            account("A1", 100),
            account("A1", 999),
            account("A2", 5),
        ]);
        let store = AccountStore::open(backend).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("A1").unwrap().balance, Decimal::new(100, 2));
        assert_eq!(store.get("A2").unwrap().balance, Decimal::new(5, 2));
    }

    #[test]
    fn test_insert_persists_whole_collection() {
        let mut store = AccountStore::open(MemoryAccountBackend::new()).unwrap();
        store.insert(account("A1", 100)).unwrap();
        store.insert(account("A2", 200)).unwrap();

        assert_eq!(store.backend().snapshot(), vec![account("A1", 100), account("A2", 200)]);
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let mut store = AccountStore::open(MemoryAccountBackend::new()).unwrap();
        store.insert(account("A1", 100)).unwrap();

        let result = store.insert(account("A1", 500));
        assert_eq!(result.unwrap_err(), LedgerError::duplicate_account("A1"));
        assert_eq!(store.get("A1").unwrap().balance, Decimal::new(100, 2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_balance_updates_in_place() {
        let backend = MemoryAccountBackend::with_accounts(vec![account("A1", 100), account("A2", 200)]);
        let mut store = AccountStore::open(backend).unwrap();

        store.set_balance("A1", Decimal::new(750, 2)).unwrap();

        assert_eq!(store.get("A1").unwrap().balance, Decimal::new(750, 2));
        assert_eq!(store.accounts()[0].id, "A1");
        assert_eq!(store.backend().snapshot()[0].balance, Decimal::new(750, 2));
        assert_eq!(store.backend().snapshot()[1], account("A2", 200));
    }

    #[test]
    fn test_set_balance_unknown_account() {
        let mut store = AccountStore::open(MemoryAccountBackend::new()).unwrap();
        assert_eq!(
            store.set_balance("nope", Decimal::ONE).unwrap_err(),
            LedgerError::account_not_found("nope")
        );
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let mut store = AccountStore::open(ReadOnlyBackend(vec![account("A1", 100)])).unwrap();

        let insert = store.insert(account("A2", 5));
        assert!(matches!(insert, Err(LedgerError::StorageFault { .. })));
        assert_eq!(store.len(), 1);
        assert!(!store.contains("A2"));

        let update = store.set_balance("A1", Decimal::ZERO);
        assert!(matches!(update, Err(LedgerError::StorageFault { .. })));
        assert_eq!(store.get("A1").unwrap().balance, Decimal::new(100, 2));
    }
}
