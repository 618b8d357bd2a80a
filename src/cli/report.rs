//! Human-readable output for the command-line front end
//!
//! All amounts are shown with two decimal places. The library never formats
//! anything itself; these helpers are the only place where presentation
//! happens.

use crate::core::{Receipt, ReplayReport};
use crate::types::{Account, Transaction, TIMESTAMP_FORMAT};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

const HISTORY_RULE: usize = 60;
const LISTING_RULE: usize = 50;

/// Format an amount with two decimal places
pub fn money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn write_created(out: &mut dyn Write, receipt: &Receipt<Account>) -> io::Result<()> {
    let account = &receipt.value;
    writeln!(out, "Account created successfully!")?;
    writeln!(out, "   Account Number: {}", account.id)?;
    writeln!(out, "   Account Holder: {}", account.holder)?;
    writeln!(out, "   Initial Balance: ${}", money(account.balance))?;
    write_journal_warning(out, receipt)
}

pub fn write_deposit(
    out: &mut dyn Write,
    amount: Decimal,
    receipt: &Receipt<Decimal>,
) -> io::Result<()> {
    writeln!(out, "Deposit successful!")?;
    writeln!(out, "   Amount deposited: ${}", money(amount))?;
    writeln!(out, "   New balance: ${}", money(receipt.value))?;
    write_journal_warning(out, receipt)
}

pub fn write_withdrawal(
    out: &mut dyn Write,
    amount: Decimal,
    receipt: &Receipt<Decimal>,
) -> io::Result<()> {
    writeln!(out, "Withdrawal successful!")?;
    writeln!(out, "   Amount withdrawn: ${}", money(amount))?;
    writeln!(out, "   New balance: ${}", money(receipt.value))?;
    write_journal_warning(out, receipt)
}

fn write_journal_warning<T>(out: &mut dyn Write, receipt: &Receipt<T>) -> io::Result<()> {
    if let Some(fault) = &receipt.journal_fault {
        writeln!(out, "Warning: transaction history was not recorded ({})", fault)?;
    }
    Ok(())
}

pub fn write_balance(out: &mut dyn Write, id: &str, holder: &str, balance: Decimal) -> io::Result<()> {
    writeln!(out, "Account Details:")?;
    writeln!(out, "   Account Number: {}", id)?;
    writeln!(out, "   Account Holder: {}", holder)?;
    writeln!(out, "   Current Balance: ${}", money(balance))
}

/// Print one account's history, or a notice when it has none
pub fn write_history<I>(out: &mut dyn Write, id: &str, entries: I) -> io::Result<usize>
where
    I: IntoIterator<Item = Transaction>,
{
    writeln!(out, "Transaction History for Account: {}", id)?;
    writeln!(out, "{}", "-".repeat(HISTORY_RULE))?;

    let mut count = 0;
    for entry in entries {
        writeln!(
            out,
            "{} | {:<15} | Amount: ${:>8} | Balance: ${:>8}",
            entry.timestamp.format(TIMESTAMP_FORMAT),
            entry.kind.as_str(),
            money(entry.amount),
            money(entry.resulting_balance)
        )?;
        count += 1;
    }

    if count == 0 {
        writeln!(out, "No transactions found for this account.")?;
    }
    writeln!(out, "{}", "-".repeat(HISTORY_RULE))?;
    Ok(count)
}

/// Print the column-aligned account listing
pub fn write_accounts<'a, I>(out: &mut dyn Write, accounts: I) -> io::Result<()>
where
    I: ExactSizeIterator<Item = &'a Account>,
{
    if accounts.len() == 0 {
        return writeln!(out, "No accounts found.");
    }

    let total = accounts.len();
    writeln!(out, "{:<15} {:<20} {:<10}", "Account Number", "Account Holder", "Balance")?;
    writeln!(out, "{}", "-".repeat(LISTING_RULE))?;
    for account in accounts {
        writeln!(
            out,
            "{:<15} {:<20} ${:>7}",
            account.id,
            account.holder,
            money(account.balance)
        )?;
    }
    writeln!(out, "{}", "-".repeat(LISTING_RULE))?;
    writeln!(out, "Total accounts: {}", total)
}

pub fn write_audit(out: &mut dyn Write, report: &ReplayReport) -> io::Result<()> {
    writeln!(
        out,
        "{}: OK ({} entries, opening ${}, deposits ${}, withdrawals ${}, balance ${})",
        report.account_id,
        report.entries,
        money(report.opening_balance),
        money(report.total_deposits),
        money(report.total_withdrawals),
        money(report.final_balance)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    #[case::whole(Decimal::new(150, 0), "150.00")]
    #[case::one_place(Decimal::new(1505, 1), "150.50")]
    #[case::rounds(Decimal::new(12345, 3), "12.35")]
    #[case::zero(Decimal::ZERO, "0.00")]
    fn test_money(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(money(amount), expected);
    }

    #[test]
    fn test_history_lines() {
        let at = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let entries = vec![Transaction::new(
            at,
            "A1",
            TransactionKind::Deposit,
            Decimal::new(5000, 2),
            Decimal::new(15000, 2),
        )];

        let text = render(|out| write_history(out, "A1", entries).map(|_| ()));
        assert!(text.contains(
            "2024-06-01 08:00:00 | DEPOSIT         | Amount: $   50.00 | Balance: $  150.00"
        ));
        assert!(!text.contains("No transactions found"));
    }

    #[test]
    fn test_history_empty() {
        let text = render(|out| write_history(out, "A1", Vec::new()).map(|_| ()));
        assert!(text.contains("No transactions found for this account."));
    }

    #[test]
    fn test_accounts_listing() {
        let accounts = vec![
            Account::new("A1", "Jane", Decimal::new(15000, 2)),
            Account::new("B2", "John", Decimal::new(5, 1)),
        ];
        let text = render(|out| write_accounts(out, accounts.iter()));

        assert!(text.contains("A1              Jane                 $ 150.00"));
        assert!(text.contains("B2              John                 $   0.50"));
        assert!(text.ends_with("Total accounts: 2\n"));
    }

    #[test]
    fn test_accounts_listing_empty() {
        let accounts: Vec<Account> = Vec::new();
        let text = render(|out| write_accounts(out, accounts.iter()));
        assert_eq!(text, "No accounts found.\n");
    }

    #[test]
    fn test_journal_warning_is_printed() {
        let receipt = Receipt {
            value: Decimal::new(150, 0),
            entry: None,
            journal_fault: Some(crate::types::LedgerError::storage_fault("disk full")),
        };
        let text = render(|out| write_deposit(out, Decimal::new(50, 0), &receipt));
        assert!(text.contains("New balance: $150.00"));
        assert!(text.contains("Warning: transaction history was not recorded (Storage fault: disk full)"));
    }
}
