//! Benchmark suite for ledger operations
//!
//! Compares the in-memory backends with the pipe-delimited file backends
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Each benchmark builds a ledger with a number of accounts and then measures
//! one kind of operation against it. File benchmarks pay for the whole-file
//! account rewrite on every mutation, so they scale with the account count.

use bank_ledger::{Ledger, LedgerConfig, MemoryAccountBackend, MemoryJournalBackend};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn main() {
    divan::main();
}

const ACCOUNT_COUNTS: &[usize] = &[10, 100, 1_000];

fn account_id(n: usize) -> String {
    format!("ACC{:05}", n)
}

/// Deposits against a ledger with in-memory backends
#[divan::bench(args = ACCOUNT_COUNTS)]
fn memory_deposit(bencher: divan::Bencher, accounts: usize) {
    let mut ledger = Ledger::open(MemoryAccountBackend::new(), MemoryJournalBackend::new())
        .expect("Failed to open ledger");
    for n in 0..accounts {
        ledger
            .create_account(&account_id(n), "Bench Holder", Decimal::new(100, 0))
            .expect("Failed to create account");
    }
    let target = account_id(accounts / 2);

    bencher.bench_local(|| {
        ledger
            .deposit(&target, Decimal::new(1, 2))
            .expect("Deposit failed")
    });
}

/// Deposits against a ledger stored in temporary files
#[divan::bench(args = ACCOUNT_COUNTS, sample_count = 20)]
fn file_deposit(bencher: divan::Bencher, accounts: usize) {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut ledger = LedgerConfig::in_dir(dir.path())
        .open_ledger()
        .expect("Failed to open ledger");
    for n in 0..accounts {
        ledger
            .create_account(&account_id(n), "Bench Holder", Decimal::new(100, 0))
            .expect("Failed to create account");
    }
    let target = account_id(accounts / 2);

    bencher.bench_local(|| {
        ledger
            .deposit(&target, Decimal::new(1, 2))
            .expect("Deposit failed")
    });
}

/// Streaming one account's history out of a journal file shared by all accounts
#[divan::bench(args = ACCOUNT_COUNTS, sample_count = 20)]
fn file_history_query(bencher: divan::Bencher, accounts: usize) {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut ledger = LedgerConfig::in_dir(dir.path())
        .open_ledger()
        .expect("Failed to open ledger");
    for n in 0..accounts {
        let id = account_id(n);
        ledger
            .create_account(&id, "Bench Holder", Decimal::new(100, 0))
            .expect("Failed to create account");
        ledger
            .deposit(&id, Decimal::new(5, 0))
            .expect("Deposit failed");
    }
    let target = account_id(accounts / 2);

    bencher.bench_local(|| {
        ledger
            .query_by_account(&target)
            .to_vec()
            .expect("History query failed")
    });
}

/// Reopening a file ledger (loading the accounts file)
#[divan::bench(args = ACCOUNT_COUNTS, sample_count = 20)]
fn file_open(bencher: divan::Bencher, accounts: usize) {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = LedgerConfig::in_dir(dir.path());
    {
        let mut ledger = config.open_ledger().expect("Failed to open ledger");
        for n in 0..accounts {
            ledger
                .create_account(&account_id(n), "Bench Holder", Decimal::new(100, 0))
                .expect("Failed to create account");
        }
    }

    bencher.bench_local(|| config.open_ledger().expect("Failed to open ledger"));
}
