// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for trigram Jaccard similarity.
//!
//! Multi-byte characters are where window slicing goes wrong, so this feeds
//! raw UTF-8 rather than digits.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phonerank::{trigram_jaccard, trigram_set};

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
}

fuzz_target!(|input: PairInput| {
    let a: String = input.a.chars().take(128).collect();
    let b: String = input.b.chars().take(128).collect();

    let sim = trigram_jaccard(&a, &b);
    assert!((0.0..=1.0).contains(&sim), "similarity {sim} out of range");
    assert_eq!(sim, trigram_jaccard(&b, &a), "similarity not symmetric");
    assert_eq!(trigram_jaccard(&a, &a), 1.0);

    let grams = trigram_set(&a);
    assert!(!grams.is_empty());
    for gram in grams {
        let n = gram.chars().count();
        assert!(n == 3 || (a.chars().count() < 3 && gram == a));
    }
});
