//! Ledger orchestration
//!
//! This module provides the `Ledger`, which coordinates the `AccountStore`
//! and the `Journal`. Every mutating operation follows the same order:
//!
//! 1. Validate the arguments
//! 2. Compute the new balance from the current account state
//! 3. Persist the account collection
//! 4. Append exactly one journal entry
//!
//! A failed step 1–3 leaves both stores untouched. A failed step 4 does not
//! undo step 3: the operation still succeeds and the fault is carried on the
//! returned `Receipt` (and logged), so the caller can report that history is
//! incomplete.

use crate::core::account_store::AccountStore;
use crate::core::journal::{AccountHistory, Clock, Journal};
use crate::core::replay::{replay, ReplayReport};
use crate::core::traits::{AccountBackend, JournalBackend};
use crate::types::{
    validate_account_id, validate_holder, Account, LedgerError, Transaction, TransactionKind,
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Result of a successful mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt<T> {
    /// What the operation returns (the new account or the new balance)
    pub value: T,

    /// The journal entry that was recorded, if the append succeeded
    pub entry: Option<Transaction>,

    /// Why the journal entry is missing, if the append failed
    pub journal_fault: Option<LedgerError>,
}

impl<T> Receipt<T> {
    /// Whether the journal recorded this operation
    pub fn is_recorded(&self) -> bool {
        self.journal_fault.is_none()
    }

    /// Drop the journal details and keep the value
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Account store plus transaction journal
pub struct Ledger<A, J> {
    accounts: AccountStore<A>,
    journal: Journal<J>,
}

impl<A: AccountBackend, J: JournalBackend> Ledger<A, J> {
    /// Open a ledger over the given backends
    ///
    /// # Errors
    ///
    /// Returns an error if the account backend cannot be loaded.
    pub fn open(accounts: A, journal: J) -> Result<Self, LedgerError> {
        Ok(Ledger {
            accounts: AccountStore::open(accounts)?,
            journal: Journal::new(journal),
        })
    }

    /// Replace the clock used to stamp journal entries
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.journal = self.journal.with_clock(clock);
        self
    }

    /// Open a new account
    ///
    /// # Returns
    ///
    /// The created account; its ACCOUNT_CREATION entry records the initial
    /// deposit as both amount and resulting balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `id` is empty or contains `|` or a line break
    /// - `holder` contains `|` or a line break
    /// - `initial_deposit` is negative
    /// - An account with `id` already exists
    /// - The account collection cannot be written
    pub fn create_account(
        &mut self,
        id: &str,
        holder: &str,
        initial_deposit: Decimal,
    ) -> Result<Receipt<Account>, LedgerError> {
        validate_account_id(id)?;
        validate_holder(holder)?;
        if initial_deposit < Decimal::ZERO {
            return Err(LedgerError::invalid_amount(initial_deposit));
        }

        let account = self
            .accounts
            .insert(Account::new(id, holder, initial_deposit))?
            .clone();
        info!(account = %id, balance = %initial_deposit, "account created");

        Ok(self.record(
            account,
            id,
            TransactionKind::AccountCreation,
            initial_deposit,
            initial_deposit,
        ))
    }

    /// Credit an account
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - The account does not exist
    /// - The new balance would overflow or cannot hold the exact sum
    /// - The account collection cannot be written
    pub fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Receipt<Decimal>, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        let current = self.balance_of(id)?;
        let new_balance = current
            .checked_add(amount)
            .filter(|sum| sum.checked_sub(current) == Some(amount))
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", id))?;

        self.accounts.set_balance(id, new_balance)?;
        info!(account = %id, %amount, balance = %new_balance, "deposit applied");

        Ok(self.record(new_balance, id, TransactionKind::Deposit, amount, new_balance))
    }

    /// Debit an account
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amount` is zero or negative
    /// - The account does not exist
    /// - `amount` exceeds the current balance
    /// - The new balance cannot hold the exact difference
    /// - The account collection cannot be written
    pub fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Receipt<Decimal>, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        let current = self.balance_of(id)?;
        if current < amount {
            return Err(LedgerError::insufficient_funds(id, current, amount));
        }
        let new_balance = current
            .checked_sub(amount)
            .filter(|rest| current.checked_sub(*rest) == Some(amount))
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", id))?;

        self.accounts.set_balance(id, new_balance)?;
        info!(account = %id, %amount, balance = %new_balance, "withdrawal applied");

        Ok(self.record(
            new_balance,
            id,
            TransactionKind::Withdrawal,
            amount,
            new_balance,
        ))
    }

    /// Holder name and current balance of an account
    pub fn get_balance(&self, id: &str) -> Result<(String, Decimal), LedgerError> {
        let account = self
            .accounts
            .get(id)
            .ok_or_else(|| LedgerError::account_not_found(id))?;
        debug!(account = %id, "balance lookup");
        Ok((account.holder.clone(), account.balance))
    }

    /// All accounts in insertion order
    pub fn list_accounts(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.accounts().iter()
    }

    /// Number of accounts
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// One account's journal entries in append order
    ///
    /// Unknown accounts are not an error; their history is simply empty.
    pub fn query_by_account(&self, id: &str) -> AccountHistory<'_, J> {
        self.journal.query_by_account(id)
    }

    /// Replay an account's journal and check it against the stored balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The journal cannot be read
    /// - Replay fails or ends on a balance different from the stored one
    pub fn audit(&self, id: &str) -> Result<ReplayReport, LedgerError> {
        let balance = self.balance_of(id)?;
        let report = replay(id, self.journal.query_by_account(id).iter()?)?;

        if report.final_balance != balance {
            return Err(LedgerError::journal_mismatch(
                id,
                format!(
                    "journal replays to {} but account balance is {}",
                    report.final_balance, balance
                ),
            ));
        }
        Ok(report)
    }

    /// Audit every account in insertion order, stopping at the first failure
    pub fn audit_all(&self) -> Result<Vec<ReplayReport>, LedgerError> {
        self.list_accounts()
            .map(|account| self.audit(&account.id))
            .collect()
    }

    /// Borrow the account store
    pub fn accounts(&self) -> &AccountStore<A> {
        &self.accounts
    }

    /// Borrow the journal
    pub fn journal(&self) -> &Journal<J> {
        &self.journal
    }

    fn balance_of(&self, id: &str) -> Result<Decimal, LedgerError> {
        self.accounts
            .get(id)
            .map(|account| account.balance)
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    fn record<T>(
        &mut self,
        value: T,
        id: &str,
        kind: TransactionKind,
        amount: Decimal,
        resulting_balance: Decimal,
    ) -> Receipt<T> {
        match self.journal.append(id, kind, amount, resulting_balance) {
            Ok(entry) => Receipt {
                value,
                entry: Some(entry),
                journal_fault: None,
            },
            Err(e) => {
                warn!(account = %id, %kind, error = %e, "account updated but journal entry was not recorded");
                Receipt {
                    value,
                    entry: None,
                    journal_fault: Some(e),
                }
            }
        }
    }
}
