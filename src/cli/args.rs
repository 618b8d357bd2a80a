use crate::config::LedgerConfig;
use crate::observability::LogFormat;
use crate::types::parse_amount;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Manage accounts and their transaction journal
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Manage accounts and their transaction journal", long_about = None)]
pub struct CliArgs {
    /// Directory holding the ledger files
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "LEDGER_DATA_DIR",
        default_value = ".",
        help = "Directory holding the accounts and journal files"
    )]
    pub data_dir: PathBuf,

    /// Accounts file name (relative to the data directory)
    #[arg(
        long = "accounts-file",
        value_name = "FILE",
        env = "LEDGER_ACCOUNTS_FILE",
        default_value = "accounts.txt"
    )]
    pub accounts_file: PathBuf,

    /// Journal file name (relative to the data directory)
    #[arg(
        long = "journal-file",
        value_name = "FILE",
        env = "LEDGER_JOURNAL_FILE",
        default_value = "transactions.txt"
    )]
    pub journal_file: PathBuf,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a new account
    Create {
        id: String,
        holder: String,
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        initial_deposit: Decimal,
    },
    /// Deposit into an account
    Deposit {
        id: String,
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Decimal,
    },
    /// Withdraw from an account
    Withdraw {
        id: String,
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Decimal,
    },
    /// Show an account's holder and balance
    Balance { id: String },
    /// Show an account's transaction history
    History { id: String },
    /// List every account
    Accounts,
    /// Check journal history against stored balances
    Audit {
        /// Audit only this account
        id: Option<String>,
    },
}

impl CliArgs {
    /// Resolve the file locations
    pub fn to_config(&self) -> LedgerConfig {
        LedgerConfig {
            accounts_path: self.data_dir.join(&self.accounts_file),
            journal_path: self.data_dir.join(&self.journal_file),
        }
    }
}
