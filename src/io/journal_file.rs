//! File-backed journal storage
//!
//! The journal is an append-only pipe-delimited file. Each entry is encoded
//! to a complete line first and then written with one `write_all` on a handle
//! opened in append mode, so entries from concurrent writers land whole.
//!
//! Reading streams the file record by record; nothing is loaded up front.
//! Per-account reads match the raw account field first and only decode the
//! matching lines, so a damaged line of one account never blocks another.

use crate::core::traits::{JournalBackend, JournalEntries};
use crate::io::record_format::{
    decode_transaction, encode_transaction, journal_account_id, reader_builder,
};
use crate::types::{LedgerError, Transaction};
use csv::StringRecordsIntoIter;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Journal backend over a pipe-delimited file
#[derive(Debug, Clone)]
pub struct FileJournalBackend {
    path: PathBuf,
}

impl FileJournalBackend {
    /// Open the journal file, creating an empty one if it does not exist
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
        Ok(FileJournalBackend { path })
    }

    /// Path of the journal file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JournalBackend for FileJournalBackend {
    fn append(&mut self, entry: &Transaction) -> Result<(), LedgerError> {
        let line = encode_transaction(entry)?;
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(&line)?;
        file.flush()?;

        debug!(path = %self.path.display(), account = %entry.account_id, kind = %entry.kind, "appended journal entry");
        Ok(())
    }

    fn entries(&self) -> Result<JournalEntries<'_>, LedgerError> {
        Ok(Box::new(self.records(None)?))
    }

    fn entries_for<'a>(&'a self, account_id: &'a str) -> Result<JournalEntries<'a>, LedgerError> {
        Ok(Box::new(self.records(Some(account_id))?))
    }
}

impl FileJournalBackend {
    fn records<'a>(&'a self, account_id: Option<&'a str>) -> Result<JournalFileIter<'a>, LedgerError> {
        let reader = reader_builder().from_path(&self.path)?;
        Ok(JournalFileIter {
            records: reader.into_records(),
            path: &self.path,
            account_id,
        })
    }
}

/// Streaming iterator over the journal file
struct JournalFileIter<'a> {
    records: StringRecordsIntoIter<File>,
    path: &'a Path,
    /// Only decode lines whose raw account field equals this
    account_id: Option<&'a str>,
}

impl Iterator for JournalFileIter<'_> {
    type Item = Result<Transaction, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e.into())),
            };
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            if let (Some(wanted), Some(found)) = (self.account_id, journal_account_id(&record)) {
                if wanted != found {
                    continue;
                }
            }

            match decode_transaction(&record) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => warn!(
                    path = %self.path.display(),
                    line,
                    fields = record.len(),
                    "skipping malformed journal record"
                ),
                Err(e) => return Some(Err(e.at_line(line))),
            }
        }
    }
}
