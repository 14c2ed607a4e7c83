// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, TimeZone, Utc};

use crate::corpus::{Corpus, InMemoryCorpus};
use crate::error::CorpusError;
use crate::types::{CorpusEntry, EntryId};

/// Fixed timestamp used by [`make_entry`] (2023-11-14T22:13:20Z).
pub const FIXTURE_TIMESTAMP: i64 = 1_700_000_000;

fn timestamp(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or(DateTime::UNIX_EPOCH)
}

/// Create a corpus entry with a fresh id and a fixed creation time.
///
/// This is the canonical implementation used across all tests.
pub fn make_entry(area_code: &str, local_number: &str, cost: u64) -> CorpusEntry {
    make_entry_at(area_code, local_number, cost, FIXTURE_TIMESTAMP)
}

/// Create a corpus entry created at `created_secs` (Unix seconds).
pub fn make_entry_at(area_code: &str, local_number: &str, cost: u64, created_secs: i64) -> CorpusEntry {
    CorpusEntry {
        id: EntryId::new_v4(),
        area_code: area_code.to_string(),
        local_number: local_number.to_string(),
        cost,
        created_at: timestamp(created_secs),
    }
}

/// The four-number corpus from the search acceptance scenario.
///
/// (415) 5551234 is the query's own number; the other three are candidates.
pub fn scenario_corpus() -> InMemoryCorpus {
    InMemoryCorpus::new(vec![
        make_entry("415", "5551234", 200),
        make_entry("415", "5551235", 150),
        make_entry("415", "5552234", 180),
        make_entry("212", "5551234", 90),
    ])
    .unwrap_or_default()
}

/// A corpus whose every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCorpus;

impl Corpus for FailingCorpus {
    fn entries_by_area_code(&self, _area_code: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        Err(CorpusError::Unavailable("area code index offline".to_string()))
    }

    fn entries_by_local_suffix(&self, _suffix: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        Err(CorpusError::Unavailable("suffix index offline".to_string()))
    }
}

/// A corpus that answers area-code lookups but fails on suffix widening.
#[derive(Debug, Clone)]
pub struct SuffixFailingCorpus(pub InMemoryCorpus);

impl Corpus for SuffixFailingCorpus {
    fn entries_by_area_code(&self, area_code: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        self.0.entries_by_area_code(area_code)
    }

    fn entries_by_local_suffix(&self, _suffix: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        Err(CorpusError::Unavailable("suffix index offline".to_string()))
    }
}
