// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Checks the metric laws on arbitrary UTF-8: identity, symmetry, the length
//! bounds, and the triangle inequality across three inputs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phonerank::edit_distance;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    c: String,
}

fn cap(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let a = cap(&input.a, 64);
    let b = cap(&input.b, 64);
    let c = cap(&input.c, 64);

    let ab = edit_distance(&a, &b);

    assert_eq!(edit_distance(&a, &a), 0);
    assert_eq!(ab, edit_distance(&b, &a), "distance not symmetric");

    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(ab >= la.abs_diff(lb), "distance below length difference");
    assert!(ab <= la.max(lb), "distance above longer length");

    let ac = edit_distance(&a, &c);
    let bc = edit_distance(&b, &c);
    assert!(ac <= ab + bc, "triangle inequality violated");
});
