// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String closeness: the two pure scorers behind ranking.
//!
//! Edit distance compares local numbers and answers "how many keystrokes
//! apart". Trigram Jaccard compares full numbers and answers "how much digit
//! structure do they share". Neither does I/O and neither can fail.

mod levenshtein;
mod trigram;

pub use levenshtein::*;
pub use trigram::*;
