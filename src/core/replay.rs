//! Journal replay
//!
//! Rebuilds an account's balance by folding its journal entries in append
//! order and checks each step against the `resulting_balance` recorded in
//! the entry. The first entry must be the account creation, whose amount is
//! the opening balance.

use crate::types::{AccountId, LedgerError, Transaction, TransactionKind};
use rust_decimal::Decimal;

/// Outcome of a successful replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub account_id: AccountId,
    /// Number of entries folded, creation included
    pub entries: usize,
    pub opening_balance: Decimal,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    /// Balance after the last entry
    pub final_balance: Decimal,
}

/// Replay one account's entries
///
/// Entries for other accounts must already be filtered out.
///
/// # Errors
///
/// Returns `LedgerError::JournalMismatch` if:
/// - There are no entries
/// - The first entry is not an account creation, or a creation appears later
/// - Any recorded `resulting_balance` differs from the replayed balance
///
/// Read errors from the entry source are passed through unchanged.
pub fn replay<I>(account_id: &str, entries: I) -> Result<ReplayReport, LedgerError>
where
    I: IntoIterator<Item = Result<Transaction, LedgerError>>,
{
    let mut entries = entries.into_iter();

    let opening = match entries.next() {
        None => return Err(LedgerError::journal_mismatch(account_id, "no journal entries")),
        Some(entry) => entry?,
    };
    if opening.kind != TransactionKind::AccountCreation {
        return Err(LedgerError::journal_mismatch(
            account_id,
            format!("first entry is {} instead of ACCOUNT_CREATION", opening.kind),
        ));
    }
    if opening.resulting_balance != opening.amount {
        return Err(LedgerError::journal_mismatch(
            account_id,
            format!(
                "creation amount {} does not match recorded balance {}",
                opening.amount, opening.resulting_balance
            ),
        ));
    }

    let mut report = ReplayReport {
        account_id: account_id.to_string(),
        entries: 1,
        opening_balance: opening.amount,
        total_deposits: Decimal::ZERO,
        total_withdrawals: Decimal::ZERO,
        final_balance: opening.amount,
    };

    for entry in entries {
        let entry = entry?;
        report.entries += 1;

        let next = match entry.kind {
            TransactionKind::Deposit => {
                report.total_deposits = report.total_deposits.saturating_add(entry.amount);
                report.final_balance.checked_add(entry.amount)
            }
            TransactionKind::Withdrawal => {
                report.total_withdrawals = report.total_withdrawals.saturating_add(entry.amount);
                report.final_balance.checked_sub(entry.amount)
            }
            TransactionKind::AccountCreation => {
                return Err(LedgerError::journal_mismatch(
                    account_id,
                    format!("repeated ACCOUNT_CREATION at entry {}", report.entries),
                ))
            }
        }
        .ok_or_else(|| LedgerError::arithmetic_overflow("replay", account_id))?;

        if next != entry.resulting_balance {
            return Err(LedgerError::journal_mismatch(
                account_id,
                format!(
                    "entry {} ({}) replays to {} but records {}",
                    report.entries, entry.kind, next, entry.resulting_balance
                ),
            ));
        }
        report.final_balance = next;
    }

    Ok(report)
}
