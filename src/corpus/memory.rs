// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory corpus with area-code and suffix indexes.
//!
//! Entries are kept sorted by `(area_code, local_number)` and each index maps a
//! key to positions in that sorted vector, so every lookup returns entries in
//! the same order on every call.
//!
//! # Invariants (checked at construction)
//!
//! - Every `area_code` is 3 ASCII digits and every `local_number` is 7.
//! - No two entries share an `(area_code, local_number)` pair.
//! - No two entries share an `id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::Corpus;
use crate::config::{DEFAULT_PREFIX_LIMIT, MAX_PREFIX_LIMIT};
use crate::error::CorpusError;
use crate::types::{check_digits, CorpusEntry, EntryId, AREA_CODE_LEN, LOCAL_NUMBER_LEN, SUFFIX_LEN};

/// One record in a corpus JSON file.
///
/// `id` and `created_at` are optional so hand-written fixtures stay short.
#[derive(Deserialize, Clone, Debug)]
pub struct CorpusRecord {
    #[serde(default)]
    pub id: Option<EntryId>,
    pub area_code: String,
    pub local_number: String,
    pub cost: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CorpusRecord {
    fn into_entry(self, loaded_at: DateTime<Utc>) -> CorpusEntry {
        CorpusEntry {
            id: self.id.unwrap_or_default(),
            area_code: self.area_code,
            local_number: self.local_number,
            cost: self.cost,
            created_at: self.created_at.unwrap_or(loaded_at),
        }
    }
}

/// Number of entries under one area code.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AreaCodeCount {
    pub area_code: String,
    pub count: usize,
}

/// One page of an area-code listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PrefixPage {
    pub results: Vec<AreaCodeCount>,
    /// Number of matching area codes before paging.
    pub count: usize,
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    entries: Vec<CorpusEntry>,
    by_area_code: HashMap<String, Vec<usize>>,
    by_suffix: HashMap<String, Vec<usize>>,
}

impl InMemoryCorpus {
    /// Build a corpus, validating formats and uniqueness.
    pub fn new(mut entries: Vec<CorpusEntry>) -> Result<Self, CorpusError> {
        let mut pairs = HashSet::with_capacity(entries.len());
        let mut ids = HashSet::with_capacity(entries.len());
        for entry in &entries {
            check_digits("area_code", &entry.area_code, AREA_CODE_LEN)
                .and_then(|()| check_digits("local_number", &entry.local_number, LOCAL_NUMBER_LEN))
                .map_err(|e| CorpusError::Malformed(format!("entry {}: {}", entry.id, e)))?;
            if !pairs.insert((entry.area_code.as_str(), entry.local_number.as_str())) {
                return Err(CorpusError::Malformed(format!(
                    "duplicate number ({}) {}",
                    entry.area_code, entry.local_number
                )));
            }
            if !ids.insert(entry.id) {
                return Err(CorpusError::Malformed(format!("duplicate id {}", entry.id)));
            }
        }

        entries.sort_by(|a, b| {
            a.area_code
                .cmp(&b.area_code)
                .then_with(|| a.local_number.cmp(&b.local_number))
        });

        let mut by_area_code: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_suffix: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, entry) in entries.iter().enumerate() {
            by_area_code
                .entry(entry.area_code.clone())
                .or_default()
                .push(pos);
            let suffix = &entry.local_number[LOCAL_NUMBER_LEN - SUFFIX_LEN..];
            by_suffix.entry(suffix.to_string()).or_default().push(pos);
        }

        Ok(Self {
            entries,
            by_area_code,
            by_suffix,
        })
    }

    /// Parse a JSON array of [`CorpusRecord`]s.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let records: Vec<CorpusRecord> =
            serde_json::from_str(json).map_err(|e| CorpusError::Malformed(e.to_string()))?;
        let loaded_at = Utc::now();
        Self::new(
            records
                .into_iter()
                .map(|record| record.into_entry(loaded_at))
                .collect(),
        )
    }

    /// Load a corpus JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let corpus = Self::from_json(&raw)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            entries = corpus.len(),
            "loaded corpus"
        );
        Ok(corpus)
    }

    /// Serialize every entry, in corpus order, as a JSON array.
    pub fn to_json(&self) -> Result<String, CorpusError> {
        serde_json::to_string_pretty(&self.entries).map_err(|e| CorpusError::Malformed(e.to_string()))
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Area codes with their entry counts, most populated first.
    ///
    /// `prefix` keeps only area codes starting with it. `limit` is clamped to
    /// `1..=500` and defaults to 100.
    pub fn area_code_counts(&self, prefix: Option<&str>, limit: Option<usize>, offset: usize) -> PrefixPage {
        let limit = limit
            .unwrap_or(DEFAULT_PREFIX_LIMIT)
            .clamp(1, MAX_PREFIX_LIMIT);

        let mut counts: Vec<AreaCodeCount> = self
            .by_area_code
            .iter()
            .filter(|(code, _)| prefix.map_or(true, |p| code.starts_with(p)))
            .map(|(code, positions)| AreaCodeCount {
                area_code: code.clone(),
                count: positions.len(),
            })
            .collect();
        counts.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.area_code.cmp(&b.area_code))
        });

        let count = counts.len();
        let results = counts.into_iter().skip(offset).take(limit).collect();
        PrefixPage {
            results,
            count,
            limit,
            offset,
        }
    }

    fn collect(&self, positions: Option<&Vec<usize>>) -> Vec<CorpusEntry> {
        positions
            .map(|positions| positions.iter().map(|&pos| self.entries[pos].clone()).collect())
            .unwrap_or_default()
    }
}

impl Corpus for InMemoryCorpus {
    fn entries_by_area_code(&self, area_code: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        Ok(self.collect(self.by_area_code.get(area_code)))
    }

    fn entries_by_local_suffix(&self, suffix: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        if suffix.len() == SUFFIX_LEN {
            return Ok(self.collect(self.by_suffix.get(suffix)));
        }
        // Other suffix lengths aren't indexed
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.local_number.ends_with(suffix))
            .cloned()
            .collect())
    }
}
