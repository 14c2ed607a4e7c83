// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance with a single rolling row.
//!
//! Unit cost for insert, delete and substitute. Time is `O(len(a) * len(b))`,
//! space is one row of `len(b) + 1` cells. Local numbers are seven digits, so
//! the table is tiny, but the function is total over any pair of strings.
//!
//! The result is a metric: `d(x, x) = 0`, `d(a, b) = d(b, a)` and
//! `d(a, c) <= d(a, b) + d(b, c)`. `tests/property/metric.rs` checks all three
//! and cross-checks against `strsim`.

/// Minimum number of single-character edits turning `a` into `b`.
///
/// Works on chars rather than bytes, so it never panics on multi-byte input.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        // dp[j] still holds the previous row here; prev is its diagonal
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}
