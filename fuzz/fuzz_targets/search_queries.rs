// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary area codes, local numbers and limits go straight to `search`.
//! Malformed input must come back as an error, never a panic, and valid input
//! must respect the limit, the self-exclusion rule and the sort order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phonerank::corpus::seed::{generate, SeedOptions};
use phonerank::{search, InMemoryCorpus, PhoneQuery, SearchError};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    area_code: String,
    local_number: String,
    limit: u8,
}

fuzz_target!(|input: QueryInput| {
    static CORPUS: std::sync::OnceLock<InMemoryCorpus> = std::sync::OnceLock::new();
    let corpus = CORPUS.get_or_init(|| {
        let entries = generate(&SeedOptions {
            count: 2_000,
            ..SeedOptions::default()
        })
        .expect("seed corpus");
        InMemoryCorpus::new(entries).expect("valid corpus")
    });

    let query = PhoneQuery {
        area_code: input.area_code,
        local_number: input.local_number,
    };
    let limit = usize::from(input.limit);

    // INVARIANT 1: bad input is rejected, not panicked on
    let results = match search(corpus, &query, limit) {
        Ok(results) => results,
        Err(SearchError::InvalidQuery { .. }) | Err(SearchError::InvalidLimit(_)) => return,
        Err(other) => panic!("unexpected error from in-memory corpus: {other}"),
    };

    // INVARIANT 2: bounded by limit
    assert!(results.len() <= limit);

    // INVARIANT 3: the query never finds itself
    let own = query.full_number();
    assert!(results.iter().all(|r| r.full_number != own));

    // INVARIANT 4: sorted by distance, then similarity descending
    for pair in results.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
        if pair[0].distance == pair[1].distance {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }
});
