// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! Distance dominates everything else. A candidate one edit away beats one two
//! edits away no matter how similar, cheap or fresh the second one is. The
//! remaining keys only break ties.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_candidates, rank};
