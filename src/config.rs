//! Ledger configuration
//!
//! Where the two ledger files live. The command-line front end builds this
//! from its flags and environment; library users construct it directly.

use crate::core::Ledger;
use crate::io::{FileAccountBackend, FileJournalBackend};
use crate::types::LedgerError;
use std::path::PathBuf;

/// Default accounts file name
pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.txt";

/// Default journal file name
pub const DEFAULT_JOURNAL_FILE: &str = "transactions.txt";

/// A ledger backed by the pipe-delimited files
pub type FileLedger = Ledger<FileAccountBackend, FileJournalBackend>;

/// File locations for a file-backed ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub accounts_path: PathBuf,
    pub journal_path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            accounts_path: PathBuf::from(DEFAULT_ACCOUNTS_FILE),
            journal_path: PathBuf::from(DEFAULT_JOURNAL_FILE),
        }
    }
}

impl LedgerConfig {
    /// Both files inside one directory, with the default names
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        LedgerConfig {
            accounts_path: dir.join(DEFAULT_ACCOUNTS_FILE),
            journal_path: dir.join(DEFAULT_JOURNAL_FILE),
        }
    }

    /// Open (and create if missing) both files and load the ledger
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened or the accounts file
    /// cannot be read.
    pub fn open_ledger(&self) -> Result<FileLedger, LedgerError> {
        let accounts = FileAccountBackend::open(&self.accounts_path)?;
        let journal = FileJournalBackend::open(&self.journal_path)?;
        Ledger::open(accounts, journal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_file_names() {
        let config = LedgerConfig::default();
        assert_eq!(config.accounts_path, PathBuf::from("accounts.txt"));
        assert_eq!(config.journal_path, PathBuf::from("transactions.txt"));
    }

    #[test]
    fn test_open_ledger_creates_both_files() {
        let dir = tempdir().unwrap();
        let config = LedgerConfig::in_dir(dir.path());

        let ledger = config.open_ledger().unwrap();
        assert_eq!(ledger.account_count(), 0);
        assert!(config.accounts_path.exists());
        assert!(config.journal_path.exists());
    }
}
