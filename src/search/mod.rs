// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Related-number search: generator, scorers and ranker glued together.
//!
//! ```text
//! PhoneQuery ──▶ candidates::generate ──▶ score_candidates ──▶ rank ──▶ Vec<RankedResult>
//!                    (corpus I/O)            (pure)            (pure)
//! ```
//!
//! The only step that touches storage is candidate generation. Everything after
//! it is CPU-bound over at most `limit * fan_out` entries. No state survives a
//! call, so concurrent searches need no coordination.

pub mod candidates;

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::error::{ConfigError, SearchError};
use crate::scoring::{rank, score_candidates};
use crate::types::{PhoneQuery, RankedResult};

/// Search with the default configuration.
pub fn search<C: Corpus + ?Sized>(
    corpus: &C,
    query: &PhoneQuery,
    limit: usize,
) -> Result<Vec<RankedResult>, SearchError> {
    search_with(corpus, query, limit, &SearchConfig::default())
}

/// Search using `config.fan_out` as the candidate cap multiplier.
///
/// `limit` is used as given; apply [`SearchConfig::clamp_limit`] first if the
/// caller's value is untrusted. A config that fails [`SearchConfig::check`] is
/// rejected before the corpus is consulted.
pub fn search_with<C: Corpus + ?Sized>(
    corpus: &C,
    query: &PhoneQuery,
    limit: usize,
    config: &SearchConfig,
) -> Result<Vec<RankedResult>, SearchError> {
    query.validate()?;
    config.check()?;
    if limit == 0 {
        return Err(SearchError::InvalidLimit(limit));
    }

    let pool = candidates::generate(corpus, query, limit, config.candidate_cap(limit))?;
    let scored = score_candidates(query, pool);
    let results = rank(scored, limit);

    tracing::debug!(query = %query, limit, results = results.len(), "search complete");
    for (position, result) in results.iter().enumerate() {
        tracing::trace!(
            position,
            full_number = %result.full_number,
            distance = result.distance,
            similarity = result.similarity,
            cost = result.cost,
        );
    }
    Ok(results)
}

/// A corpus bundled with its search configuration.
///
/// Cheap to share: holds no per-query state, so `&RelatedNumberSearch` can be
/// used from many threads when `C` is `Sync`.
#[derive(Debug, Clone)]
pub struct RelatedNumberSearch<C> {
    corpus: C,
    config: SearchConfig,
}

impl<C: Corpus> RelatedNumberSearch<C> {
    /// Bundle `corpus` with `config`, rejecting configs that fail [`SearchConfig::check`].
    pub fn new(corpus: C, config: SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            corpus,
            config: config.validated()?,
        })
    }

    pub fn corpus(&self) -> &C {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search with `limit` resolved through [`SearchConfig::clamp_limit`].
    pub fn search(&self, query: &PhoneQuery, limit: Option<usize>) -> Result<Vec<RankedResult>, SearchError> {
        let limit = self.config.clamp_limit(limit);
        search_with(&self.corpus, query, limit, &self.config)
    }

    /// Run independent searches, in parallel when the `parallel` feature is on.
    ///
    /// Output order matches `queries`. One failing query does not stop the rest.
    pub fn search_batch(
        &self,
        queries: &[PhoneQuery],
        limit: Option<usize>,
    ) -> Vec<Result<Vec<RankedResult>, SearchError>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|query| self.search(query, limit))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|query| self.search(query, limit))
                .collect()
        }
    }
}
