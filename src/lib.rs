// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Related phone number search.
//!
//! Given a query number, find the closest numbers in a corpus. Closeness is
//! edit distance between local numbers first, then trigram similarity of the
//! full numbers, then price, then age.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  corpus     │────▶│ search::candidates│────▶│  scoring     │────▶│  ranking    │
//! │ (Corpus,    │     │ (area code, then  │     │ (distance,   │     │ (compare,   │
//! │  InMemory)  │     │  suffix widening) │     │  similarity) │     │  truncate)  │
//! └─────────────┘     └───────────────────┘     └──────────────┘     └─────────────┘
//!                                                      │
//!                                                      ▼
//!                                               ┌──────────────┐
//!                                               │   fuzzy      │
//!                                               │ (levenshtein,│
//!                                               │  trigram)    │
//!                                               └──────────────┘
//! ```
//!
//! # Properties
//!
//! | Property                          | Where it is checked                |
//! |-----------------------------------|------------------------------------|
//! | `edit_distance` is a metric       | `tests/property/metric.rs`         |
//! | `trigram_jaccard` symmetric, ≤ 1  | `tests/property/metric.rs`         |
//! | `len(results) <= limit`           | `tests/property/search_results.rs` |
//! | query never in its own results    | `tests/property/search_results.rs` |
//! | same snapshot, same output        | `tests/search/determinism.rs`      |
//!
//! # Usage
//!
//! ```ignore
//! use phonerank::{search, InMemoryCorpus, PhoneQuery};
//!
//! let corpus = InMemoryCorpus::from_path("numbers.json")?;
//! let query = PhoneQuery::new("415", "5551234")?;
//!
//! for result in search(&corpus, &query, 10)? {
//!     println!("{} d={} sim={}", result.full_number, result.distance, result.similarity);
//! }
//! ```

// Module declarations
pub mod config;
pub mod corpus;
pub mod error;
mod fuzzy;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::SearchConfig;
pub use corpus::{AreaCodeCount, Corpus, InMemoryCorpus, PrefixPage};
pub use error::{ConfigError, CorpusError, SearchError};
pub use fuzzy::{edit_distance, trigram_jaccard, trigram_set};
pub use scoring::{compare_candidates, rank, round_similarity, score_candidates};
pub use search::candidates::{generate as generate_candidates, CandidateSet};
pub use search::{search, search_with, RelatedNumberSearch};
pub use types::{
    CorpusEntry, EntryId, PhoneQuery, RankedResult, ScoredCandidate, AREA_CODE_LEN,
    LOCAL_NUMBER_LEN, SUFFIX_LEN,
};
