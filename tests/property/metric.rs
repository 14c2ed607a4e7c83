//! Scorer properties.
//!
//! `edit_distance` must be a metric (identity, symmetry, triangle inequality)
//! and agree with both the full-matrix oracle and `strsim`. `trigram_jaccard`
//! must be symmetric, bounded, and exactly 1.0 on identical non-empty input.

use crate::common::digits_strategy;
use crate::oracles::{oracle_levenshtein, oracle_trigram_jaccard};
use phonerank::{edit_distance, trigram_jaccard};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ========================================================================
    // EDIT DISTANCE
    // ========================================================================

    #[test]
    fn prop_distance_identity(x in digits_strategy()) {
        prop_assert_eq!(edit_distance(&x, &x), 0);
    }

    #[test]
    fn prop_distance_zero_only_when_equal(a in digits_strategy(), b in digits_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_distance_symmetric(a in digits_strategy(), b in digits_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn prop_distance_triangle_inequality(
        a in digits_strategy(),
        b in digits_strategy(),
        c in digits_strategy(),
    ) {
        let ac = edit_distance(&a, &c);
        let ab = edit_distance(&a, &b);
        let bc = edit_distance(&b, &c);
        prop_assert!(ac <= ab + bc, "d({a},{c})={ac} > d({a},{b})={ab} + d({b},{c})={bc}");
    }

    #[test]
    fn prop_distance_bounded_by_lengths(a in digits_strategy(), b in digits_strategy()) {
        let d = edit_distance(&a, &b);
        prop_assert!(d >= a.len().abs_diff(b.len()));
        prop_assert!(d <= a.len().max(b.len()));
    }

    #[test]
    fn prop_distance_matches_oracle(a in digits_strategy(), b in digits_strategy()) {
        prop_assert_eq!(edit_distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn prop_distance_matches_strsim(a in ".{0,10}", b in ".{0,10}") {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    // ========================================================================
    // TRIGRAM JACCARD
    // ========================================================================

    #[test]
    fn prop_jaccard_self_is_one(x in "[0-9]{1,12}") {
        prop_assert_eq!(trigram_jaccard(&x, &x), 1.0);
    }

    #[test]
    fn prop_jaccard_symmetric(a in digits_strategy(), b in digits_strategy()) {
        prop_assert_eq!(trigram_jaccard(&a, &b), trigram_jaccard(&b, &a));
    }

    #[test]
    fn prop_jaccard_bounded(a in ".{0,12}", b in ".{0,12}") {
        let sim = trigram_jaccard(&a, &b);
        prop_assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn prop_jaccard_matches_oracle(a in digits_strategy(), b in digits_strategy()) {
        let got = trigram_jaccard(&a, &b);
        let want = oracle_trigram_jaccard(&a, &b);
        prop_assert!((got - want).abs() < 1e-12, "{} vs {} for ({}, {})", got, want, a, b);
    }
}

#[test]
fn test_triangle_on_phone_like_triples() {
    let samples = ["5551234", "5551235", "5552234", "1234555", "0000000", "555123", ""];
    for a in samples {
        for b in samples {
            for c in samples {
                assert!(edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c));
            }
        }
    }
}
