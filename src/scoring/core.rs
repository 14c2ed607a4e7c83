// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Attaching scores to candidates.
//!
//! Distance is measured on the local number only, so a number in another area
//! code with the same local digits is distance 0. Similarity is measured on the
//! full number, which is what separates those cross-area matches from
//! same-area ones.

use crate::fuzzy::{edit_distance, trigram_jaccard};
use crate::types::{CorpusEntry, PhoneQuery, ScoredCandidate};

/// Decimal places kept in reported similarity.
pub const SIMILARITY_PRECISION: i32 = 6;

/// Score every candidate against the query. Order is preserved.
pub fn score_candidates(query: &PhoneQuery, entries: Vec<CorpusEntry>) -> Vec<ScoredCandidate> {
    let query_full = query.full_number();
    entries
        .into_iter()
        .map(|entry| {
            let distance = edit_distance(&query.local_number, &entry.local_number);
            let similarity = trigram_jaccard(&query_full, &entry.full_number());
            ScoredCandidate {
                entry,
                distance,
                similarity,
            }
        })
        .collect()
}

/// Round to [`SIMILARITY_PRECISION`] decimal places, half away from zero.
pub fn round_similarity(similarity: f64) -> f64 {
    let scale = 10f64.powi(SIMILARITY_PRECISION);
    (similarity * scale).round() / scale
}
