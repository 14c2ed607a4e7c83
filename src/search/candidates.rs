// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate generation: two cheap lookups instead of a corpus scan.
//!
//! Step one takes everyone in the query's area code. If that already yields
//! `limit` candidates we stop. Otherwise we widen to numbers sharing the last
//! four local digits, in any area code, until the pool holds `cap` entries
//! ([`crate::SearchConfig::candidate_cap`], i.e. `limit * fan_out`). A cap below
//! `limit` is raised to `limit`, so widening can always fill the limit.
//!
//! **Invariant**: each entry appears at most once, keyed by [`EntryId`] only,
//! and the query's own `(area_code, local_number)` never appears.
//! [`CandidateSet`] enforces both; the generator never pushes into a `Vec`
//! directly.

use std::collections::HashSet;

use crate::corpus::Corpus;
use crate::error::SearchError;
use crate::types::{CorpusEntry, EntryId, PhoneQuery};

/// Insertion-ordered candidate pool that drops repeats and the query itself.
#[derive(Debug)]
pub struct CandidateSet<'q> {
    query: &'q PhoneQuery,
    seen: HashSet<EntryId>,
    entries: Vec<CorpusEntry>,
}

impl<'q> CandidateSet<'q> {
    pub fn new(query: &'q PhoneQuery) -> Self {
        Self {
            query,
            seen: HashSet::new(),
            entries: Vec::new(),
        }
    }

    /// Add an entry. Returns false if it was the query or already present.
    pub fn insert(&mut self, entry: CorpusEntry) -> bool {
        if entry.matches(self.query) || !self.seen.insert(entry.id) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<CorpusEntry> {
        self.entries
    }
}

/// Pull a bounded, deduplicated candidate pool for `query`.
///
/// Corpus errors are returned as-is inside [`SearchError::Corpus`].
pub fn generate<C: Corpus + ?Sized>(
    corpus: &C,
    query: &PhoneQuery,
    limit: usize,
    cap: usize,
) -> Result<Vec<CorpusEntry>, SearchError> {
    let mut pool = CandidateSet::new(query);
    for entry in corpus.entries_by_area_code(&query.area_code)? {
        pool.insert(entry);
    }

    if pool.len() >= limit {
        tracing::debug!(
            area_code = %query.area_code,
            candidates = pool.len(),
            "area code alone fills the limit"
        );
        return Ok(pool.into_entries());
    }

    let cap = cap.max(limit);
    let suffix = query.last_four();
    let from_area_code = pool.len();
    for entry in corpus.entries_by_local_suffix(suffix)? {
        // The area-code pool may already exceed the cap on its own
        if pool.len() >= cap {
            break;
        }
        pool.insert(entry);
    }

    tracing::debug!(
        area_code = %query.area_code,
        suffix,
        from_area_code,
        from_suffix = pool.len() - from_area_code,
        cap,
        "widened candidates by suffix"
    );
    Ok(pool.into_entries())
}
