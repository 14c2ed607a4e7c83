// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic sample corpora.
//!
//! Same seed, same corpus, down to the ids. Useful for demos, benchmarks and
//! reproducible bug reports.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use uuid::Builder;

use crate::error::ConfigError;
use crate::types::{CorpusEntry, EntryId};

/// Area codes sampled from.
pub const SEED_AREA_CODES: &[&str] = &[
    "212", "305", "415", "646", "702", "713", "818", "917", "972", "206",
];

/// Price list sampled from.
pub const SEED_COSTS: &[u64] = &[49, 79, 99, 149, 199, 249, 299, 349, 399, 499];

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default number of generated entries.
pub const DEFAULT_SEED_COUNT: usize = 100;

const LOCAL_NUMBER_SPACE: u32 = 10_000_000;

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub count: usize,
    pub seed: u64,
    /// Timestamp of the first entry; each later entry is one second newer.
    pub start: DateTime<Utc>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_SEED_COUNT,
            seed: DEFAULT_SEED,
            start: DateTime::UNIX_EPOCH,
        }
    }
}

/// Generate `options.count` entries with unique `(area_code, local_number)` pairs.
pub fn generate(options: &SeedOptions) -> Result<Vec<CorpusEntry>, ConfigError> {
    let capacity = SEED_AREA_CODES.len() * LOCAL_NUMBER_SPACE as usize;
    if options.count > capacity {
        return Err(ConfigError::Invalid {
            field: "count",
            reason: format!(
                "cannot seed {} unique numbers from {} area codes",
                options.count,
                SEED_AREA_CODES.len()
            ),
        });
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut seen = HashSet::with_capacity(options.count);
    let mut entries = Vec::with_capacity(options.count);

    while entries.len() < options.count {
        let Some(&area_code) = SEED_AREA_CODES.choose(&mut rng) else {
            break;
        };
        let local_number = format!("{:07}", rng.gen_range(0..LOCAL_NUMBER_SPACE));
        if !seen.insert((area_code, local_number.clone())) {
            continue;
        }
        let cost = SEED_COSTS.choose(&mut rng).copied().unwrap_or(SEED_COSTS[0]);
        let id = EntryId(Builder::from_random_bytes(rng.gen()).into_uuid());
        let created_at = options.start + Duration::seconds(entries.len() as i64);

        entries.push(CorpusEntry {
            id,
            area_code: area_code.to_string(),
            local_number,
            cost,
            created_at,
        });
    }

    tracing::debug!(count = entries.len(), seed = options.seed, "generated seed corpus");
    Ok(entries)
}
