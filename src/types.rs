// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types that flow through a related-number search.
//!
//! A search starts from a [`PhoneQuery`], pulls [`CorpusEntry`] snapshots out of
//! a corpus, turns them into [`ScoredCandidate`]s and hands back
//! [`RankedResult`]s. Everything is plain owned data: nothing here is shared
//! between searches and nothing outlives the call that produced it, except the
//! corpus entries themselves, which belong to the storage layer.
//!
//! # Invariants
//!
//! - **PhoneQuery**: `area_code` is exactly 3 ASCII digits, `local_number`
//!   exactly 7. Enforced by [`PhoneQuery::new`]; the ranking engine trusts it.
//!
//! - **ScoredCandidate**: `0.0 <= similarity <= 1.0`.
//!
//! - **RankedResult**: `full_number == area_code + local_number`, and
//!   `similarity` is rounded to 6 decimal places.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::SearchError;

/// Number of digits in an area code.
pub const AREA_CODE_LEN: usize = 3;

/// Number of digits in a local number.
pub const LOCAL_NUMBER_LEN: usize = 7;

/// Number of trailing local digits used for suffix widening.
pub const SUFFIX_LEN: usize = 4;

// =============================================================================
// IDENTITY
// =============================================================================

/// Opaque identity of a corpus entry.
///
/// Only equality and hashing matter to the engine: two entries with the same
/// `EntryId` are the same row, even if they arrive through different lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Fresh random identity.
    pub fn new_v4() -> Self {
        EntryId(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new_v4()
    }
}

impl From<Uuid> for EntryId {
    fn from(id: Uuid) -> Self {
        EntryId(id)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// QUERY
// =============================================================================

/// The number a caller wants related numbers for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneQuery {
    pub area_code: String,
    pub local_number: String,
}

impl PhoneQuery {
    /// Build a query, rejecting anything that isn't `^\d{3}$` / `^\d{7}$`.
    pub fn new(area_code: impl Into<String>, local_number: impl Into<String>) -> Result<Self, SearchError> {
        let area_code = area_code.into();
        let local_number = local_number.into();
        check_digits("area_code", &area_code, AREA_CODE_LEN)?;
        check_digits("local_number", &local_number, LOCAL_NUMBER_LEN)?;
        Ok(Self {
            area_code,
            local_number,
        })
    }

    /// Re-check a query that was built directly from its fields.
    pub fn validate(&self) -> Result<(), SearchError> {
        check_digits("area_code", &self.area_code, AREA_CODE_LEN)?;
        check_digits("local_number", &self.local_number, LOCAL_NUMBER_LEN)
    }

    /// Area code followed by local number.
    pub fn full_number(&self) -> String {
        format!("{}{}", self.area_code, self.local_number)
    }

    /// The last [`SUFFIX_LEN`] characters of the local number.
    ///
    /// Falls back to the whole local number when it is shorter than that.
    pub fn last_four(&self) -> &str {
        let chars = self.local_number.char_indices().rev().nth(SUFFIX_LEN - 1);
        match chars {
            Some((start, _)) => &self.local_number[start..],
            None => &self.local_number,
        }
    }
}

impl fmt::Display for PhoneQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.area_code, self.local_number)
    }
}

/// Fail with `InvalidQuery` unless `value` is exactly `len` ASCII digits.
pub(crate) fn check_digits(field: &'static str, value: &str, len: usize) -> Result<(), SearchError> {
    if value.len() != len {
        return Err(SearchError::InvalidQuery {
            field,
            value: value.to_string(),
            reason: format!("expected exactly {} digits", len),
        });
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SearchError::InvalidQuery {
            field,
            value: value.to_string(),
            reason: "must contain only digits".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// CORPUS ENTRY
// =============================================================================

/// One number in the corpus, as seen by the engine.
///
/// Owned by the storage layer. The engine only ever reads a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    pub id: EntryId,
    pub area_code: String,
    pub local_number: String,
    pub cost: u64,
    pub created_at: DateTime<Utc>,
}

impl CorpusEntry {
    /// Area code followed by local number.
    pub fn full_number(&self) -> String {
        format!("{}{}", self.area_code, self.local_number)
    }

    /// True when this entry is the query's own number.
    #[inline]
    pub fn matches(&self, query: &PhoneQuery) -> bool {
        self.area_code == query.area_code && self.local_number == query.local_number
    }
}

// =============================================================================
// SCORING OUTPUT
// =============================================================================

/// A candidate with both scores attached. Lives for one search call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub entry: CorpusEntry,
    /// Edit distance between the local numbers.
    pub distance: usize,
    /// Trigram Jaccard similarity between the full numbers, in `[0.0, 1.0]`.
    pub similarity: f64,
}

/// What the caller gets back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub area_code: String,
    pub local_number: String,
    pub full_number: String,
    pub cost: u64,
    pub distance: usize,
    pub similarity: f64,
}
