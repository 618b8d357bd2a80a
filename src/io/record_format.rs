//! Pipe-delimited record format
//!
//! This module centralizes the on-disk layout of both files:
//! - Account records: `id|holder|balance`
//! - Journal records: `timestamp|account_id|kind|amount|resulting_balance`
//!
//! One record per line, no header, no quoting. Balances and amounts are
//! written with whatever scale the decimal carries.
//!
//! Decoding mirrors what older files contain: a line with the wrong number of
//! fields is not a record and is skipped by the callers, while a line with the
//! right shape but unreadable content is reported as `CorruptRecord`.

use crate::types::{
    parse_decimal, Account, LedgerError, Transaction, TransactionKind, TIMESTAMP_FORMAT,
};
use chrono::NaiveDateTime;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Field separator used by both files
pub const DELIMITER: u8 = b'|';

/// Number of fields in an account record
pub const ACCOUNT_FIELDS: usize = 3;

/// Number of fields in a journal record
pub const TRANSACTION_FIELDS: usize = 5;

/// Position of the account id in a journal record
const JOURNAL_ACCOUNT_FIELD: usize = 1;

#[derive(Debug, Deserialize)]
struct AccountRow {
    id: String,
    holder: String,
    balance: String,
}

#[derive(Debug, Serialize)]
struct AccountRowRef<'a> {
    id: &'a str,
    holder: &'a str,
    balance: String,
}

#[derive(Debug, Deserialize)]
struct TransactionRow {
    timestamp: String,
    account_id: String,
    kind: TransactionKind,
    amount: String,
    resulting_balance: String,
}

#[derive(Debug, Serialize)]
struct TransactionRowRef<'a> {
    timestamp: String,
    account_id: &'a str,
    kind: TransactionKind,
    amount: String,
    resulting_balance: String,
}

/// Reader configuration for either file
///
/// Flexible so that short or long lines reach the decoder, which skips them.
pub fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

/// Writer configuration for either file
pub fn writer_builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'));
    builder
}

fn decimal_field(text: &str, field: &str) -> Result<Decimal, LedgerError> {
    parse_decimal(text)
        .ok_or_else(|| LedgerError::corrupt_record(format!("invalid {} '{}'", field, text)))
}

fn deserialize_error(error: csv::Error) -> LedgerError {
    LedgerError::corrupt_record(error.to_string())
}

/// Decode one account record
///
/// # Returns
///
/// * `Ok(Some(Account))` - A well-formed record
/// * `Ok(None)` - The line does not have exactly three fields
/// * `Err(LedgerError)` - Three fields, but the balance is unreadable or negative
pub fn decode_account(record: &StringRecord) -> Result<Option<Account>, LedgerError> {
    if record.len() != ACCOUNT_FIELDS {
        return Ok(None);
    }
    let row: AccountRow = record.deserialize(None).map_err(deserialize_error)?;
    let balance = decimal_field(&row.balance, "balance")?;
    if balance < Decimal::ZERO {
        return Err(LedgerError::corrupt_record(format!(
            "negative balance '{}'",
            row.balance
        )));
    }
    Ok(Some(Account::new(row.id, row.holder, balance)))
}

/// Account id of a raw journal record, without decoding anything else
///
/// Returns `None` when the line does not have exactly five fields.
pub fn journal_account_id(record: &StringRecord) -> Option<&str> {
    if record.len() != TRANSACTION_FIELDS {
        return None;
    }
    record.get(JOURNAL_ACCOUNT_FIELD)
}

/// Decode one journal record
///
/// # Returns
///
/// * `Ok(Some(Transaction))` - A well-formed record
/// * `Ok(None)` - The line does not have exactly five fields
/// * `Err(LedgerError)` - Five fields, but a timestamp, kind or number is unreadable
pub fn decode_transaction(record: &StringRecord) -> Result<Option<Transaction>, LedgerError> {
    if record.len() != TRANSACTION_FIELDS {
        return Ok(None);
    }
    let row: TransactionRow = record.deserialize(None).map_err(deserialize_error)?;
    let timestamp = NaiveDateTime::parse_from_str(row.timestamp.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| {
            LedgerError::corrupt_record(format!("invalid timestamp '{}': {}", row.timestamp, e))
        })?;

    Ok(Some(Transaction::new(
        timestamp,
        row.account_id,
        row.kind,
        decimal_field(&row.amount, "amount")?,
        decimal_field(&row.resulting_balance, "resulting balance")?,
    )))
}

/// Write every account, one record per line
pub fn write_accounts<W: Write>(accounts: &[Account], output: W) -> Result<(), LedgerError> {
    let mut writer = writer_builder().from_writer(output);
    for account in accounts {
        writer.serialize(AccountRowRef {
            id: &account.id,
            holder: &account.holder,
            balance: account.balance.to_string(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Encode one journal entry as a complete line
///
/// The caller writes the returned bytes with a single write so concurrent
/// appenders cannot interleave inside a record.
pub fn encode_transaction(entry: &Transaction) -> Result<Vec<u8>, LedgerError> {
    let mut writer = writer_builder().from_writer(Vec::new());
    writer.serialize(TransactionRowRef {
        timestamp: entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        account_id: &entry.account_id,
        kind: entry.kind,
        amount: entry.amount.to_string(),
        resulting_balance: entry.resulting_balance.to_string(),
    })?;
    writer
        .into_inner()
        .map_err(|e| LedgerError::storage_fault(e.error().to_string()))
}
