// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trigram Jaccard similarity.
//!
//! A string of length >= 3 contributes every overlapping 3-char window; a
//! shorter string contributes itself as a single token. Similarity is
//! `|A ∩ B| / |A ∪ B|`, with an empty union scoring 0.0.

use std::collections::HashSet;

/// Width of a trigram window, in chars.
const GRAM: usize = 3;

/// All overlapping trigrams of `value`, or `{value}` when it is too short.
pub fn trigram_set(value: &str) -> HashSet<&str> {
    let boundaries: Vec<usize> = value
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(value.len()))
        .collect();
    let char_count = boundaries.len() - 1;

    if char_count < GRAM {
        return HashSet::from([value]);
    }

    (0..=char_count - GRAM)
        .map(|i| &value[boundaries[i]..boundaries[i + GRAM]])
        .collect()
}

/// Jaccard similarity of the two trigram sets, in `[0.0, 1.0]`.
pub fn trigram_jaccard(a: &str, b: &str) -> f64 {
    let set_a = trigram_set(a);
    let set_b = trigram_set(b);

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}
