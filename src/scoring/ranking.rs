// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! The order is a fixed chain of keys, each one consulted only when every key
//! before it ties:
//!
//! 1. **Distance** ascending
//! 2. **Similarity** descending
//! 3. **Cost** ascending
//! 4. **Created at** descending (newer first)
//!
//! Candidates equal on all four keys keep their input order (the sort is
//! stable), so the same corpus snapshot always yields the same output.

use crate::scoring::core::round_similarity;
use crate::types::{RankedResult, ScoredCandidate};
use std::cmp::Ordering;

/// Compare two scored candidates for ranking. `Less` means `a` ranks first.
///
/// # Example
///
/// ```ignore
/// // One edit away beats two edits away, even when it costs more
/// let near = ScoredCandidate { distance: 1, similarity: 0.2, .. };
/// let far = ScoredCandidate { distance: 2, similarity: 0.9, .. };
///
/// assert_eq!(compare_candidates(&near, &far), Ordering::Less);
/// ```
pub fn compare_candidates(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    // Primary: distance (ascending - closer wins)
    match a.distance.cmp(&b.distance) {
        Ordering::Equal => {
            // Secondary: similarity (descending). total_cmp keeps NaN from
            // making the order inconsistent.
            match b.similarity.total_cmp(&a.similarity) {
                Ordering::Equal => {
                    // Tertiary: cost (ascending - cheaper wins)
                    match a.entry.cost.cmp(&b.entry.cost) {
                        // Final: created_at (descending - newer wins)
                        Ordering::Equal => b.entry.created_at.cmp(&a.entry.created_at),
                        ord => ord,
                    }
                }
                ord => ord,
            }
        }
        ord => ord,
    }
}

/// Sort by [`compare_candidates`], keep the first `limit`, and shape the output.
pub fn rank(mut scored: Vec<ScoredCandidate>, limit: usize) -> Vec<RankedResult> {
    scored.sort_by(compare_candidates);
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|candidate| {
            let full_number = candidate.entry.full_number();
            RankedResult {
                area_code: candidate.entry.area_code,
                local_number: candidate.entry.local_number,
                full_number,
                cost: candidate.entry.cost,
                distance: candidate.distance,
                similarity: round_similarity(candidate.similarity),
            }
        })
        .collect()
}
