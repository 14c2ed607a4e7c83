// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: where candidate numbers come from.
//!
//! The engine needs exactly two indexed lookups from storage, so that is all
//! [`Corpus`] asks for. Any store that can answer "who is in area code X" and
//! "whose local number ends in S" can back a search. [`InMemoryCorpus`] is the
//! bundled adapter, used by the CLI and by tests.
//!
//! Implementations may return the query's own entry; the engine filters it.

pub mod memory;
pub mod seed;

use crate::error::CorpusError;
use crate::types::CorpusEntry;
use std::sync::Arc;

pub use memory::{AreaCodeCount, InMemoryCorpus, PrefixPage};

/// Read-only lookups the search engine needs from storage.
///
/// `Send + Sync` so one corpus can serve searches on many threads at once.
pub trait Corpus: Send + Sync {
    /// All entries whose area code equals `area_code`.
    fn entries_by_area_code(&self, area_code: &str) -> Result<Vec<CorpusEntry>, CorpusError>;

    /// All entries whose local number ends with `suffix`.
    fn entries_by_local_suffix(&self, suffix: &str) -> Result<Vec<CorpusEntry>, CorpusError>;
}

impl<C: Corpus + ?Sized> Corpus for &C {
    fn entries_by_area_code(&self, area_code: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        (**self).entries_by_area_code(area_code)
    }

    fn entries_by_local_suffix(&self, suffix: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        (**self).entries_by_local_suffix(suffix)
    }
}

impl<C: Corpus + ?Sized> Corpus for Arc<C> {
    fn entries_by_area_code(&self, area_code: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        (**self).entries_by_area_code(area_code)
    }

    fn entries_by_local_suffix(&self, suffix: &str) -> Result<Vec<CorpusEntry>, CorpusError> {
        (**self).entries_by_local_suffix(suffix)
    }
}
