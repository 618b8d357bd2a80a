//! File-backed account storage
//!
//! Accounts live in a single pipe-delimited file that is rewritten in full on
//! every mutation. The rewrite goes to a temporary file in the same directory,
//! is synced, and is then renamed over the original, so readers only ever see
//! the old collection or the new one. The staged file takes over the
//! original's permissions before the rename.

use crate::core::traits::AccountBackend;
use crate::io::record_format::{decode_account, reader_builder, write_accounts};
use crate::types::{Account, LedgerError};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Account backend over a pipe-delimited file
#[derive(Debug, Clone)]
pub struct FileAccountBackend {
    path: PathBuf,
}

impl FileAccountBackend {
    /// Open the accounts file, creating an empty one if it does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or opened.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LedgerError::storage_fault(format!("cannot open '{}': {}", path.display(), e))
            })?;
        Ok(FileAccountBackend { path })
    }

    /// Path of the accounts file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl AccountBackend for FileAccountBackend {
    fn load_all(&self) -> Result<Vec<Account>, LedgerError> {
        let mut reader = reader_builder().from_path(&self.path)?;
        let mut accounts = Vec::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            match decode_account(&record).map_err(|e| e.at_line(line))? {
                Some(account) => accounts.push(account),
                None => warn!(
                    path = %self.path.display(),
                    line,
                    fields = record.len(),
                    "skipping malformed account record"
                ),
            }
        }

        debug!(path = %self.path.display(), count = accounts.len(), "read accounts file");
        Ok(accounts)
    }

    fn replace_all(&mut self, accounts: &[Account]) -> Result<(), LedgerError> {
        let mut staged = NamedTempFile::new_in(self.directory())?;
        {
            let mut output = BufWriter::new(staged.as_file_mut());
            write_accounts(accounts, &mut output)?;
            output.flush()?;
        }
        if let Ok(metadata) = fs::metadata(&self.path) {
            staged.as_file().set_permissions(metadata.permissions())?;
        }
        staged.as_file().sync_all()?;
        staged
            .persist(&self.path)
            .map_err(|e| LedgerError::from(e.error))?;

        debug!(path = %self.path.display(), count = accounts.len(), "rewrote accounts file");
        Ok(())
    }
}
