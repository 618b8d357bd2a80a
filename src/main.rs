//! Bank Ledger CLI
//!
//! Command-line interface for managing accounts and their transaction journal.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- create A1 "Jane Doe" 100.00
//! cargo run -- deposit A1 50
//! cargo run -- withdraw A1 30
//! cargo run -- balance A1
//! cargo run -- history A1
//! cargo run -- accounts
//! cargo run -- --data-dir /var/ledger audit
//! ```
//!
//! State lives in two pipe-delimited files (`accounts.txt` and
//! `transactions.txt` by default) which are created on first use.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid input, unknown account, insufficient funds, storage fault, etc.)

use bank_ledger::cli::{self, report, Command};
use bank_ledger::{observability, FileLedger, LedgerError};
use std::io::{self, Write};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    observability::init(args.log_format);

    let mut ledger = match args.to_config().open_ledger() {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&mut ledger, args.command, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(ledger: &mut FileLedger, command: Command, out: &mut dyn Write) -> Result<(), LedgerError> {
    match command {
        Command::Create {
            id,
            holder,
            initial_deposit,
        } => {
            let receipt = ledger.create_account(id.trim(), holder.trim(), initial_deposit)?;
            report::write_created(out, &receipt)?;
        }
        Command::Deposit { id, amount } => {
            let receipt = ledger.deposit(id.trim(), amount)?;
            report::write_deposit(out, amount, &receipt)?;
        }
        Command::Withdraw { id, amount } => {
            let receipt = ledger.withdraw(id.trim(), amount)?;
            report::write_withdrawal(out, amount, &receipt)?;
        }
        Command::Balance { id } => {
            let id = id.trim();
            let (holder, balance) = ledger.get_balance(id)?;
            report::write_balance(out, id, &holder, balance)?;
        }
        Command::History { id } => {
            let id = id.trim();
            let entries = ledger
                .query_by_account(id)
                .iter()?
                .collect::<Result<Vec<_>, _>>()?;
            report::write_history(out, id, entries)?;
        }
        Command::Accounts => {
            report::write_accounts(out, ledger.list_accounts())?;
        }
        Command::Audit { id } => {
            let reports = match id {
                Some(id) => vec![ledger.audit(id.trim())?],
                None => ledger.audit_all()?,
            };
            for entry in &reports {
                report::write_audit(out, entry)?;
            }
            writeln!(out, "Audited {} account(s)", reports.len())?;
        }
    }
    Ok(())
}
