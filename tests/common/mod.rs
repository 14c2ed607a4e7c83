//! Shared test utilities and fixtures.

#![allow(dead_code)]

use phonerank::{CorpusEntry, InMemoryCorpus, PhoneQuery};
use proptest::prelude::*;

// Re-export canonical test utilities from phonerank::testing
pub use phonerank::testing::{make_entry, make_entry_at, scenario_corpus, FailingCorpus};

// ============================================================================
// FIXTURES
// ============================================================================

/// The query used by the acceptance scenario.
pub fn scenario_query() -> PhoneQuery {
    PhoneQuery::new("415", "5551234").expect("valid query")
}

/// Build a corpus from `(area_code, local_number, cost)` triples.
pub fn corpus_of(rows: &[(&str, &str, u64)]) -> InMemoryCorpus {
    let entries: Vec<CorpusEntry> = rows
        .iter()
        .map(|&(area, local, cost)| make_entry(area, local, cost))
        .collect();
    InMemoryCorpus::new(entries).expect("fixture corpus must be valid")
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// A three-digit area code drawn from a small pool, so collisions are common.
pub fn area_code_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["212", "213", "415", "646", "917"]).prop_map(str::to_string)
}

/// A seven-digit local number. Digits are biased toward a few values so that
/// suffix collisions and small edit distances actually occur.
pub fn local_number_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['1', '2', '3', '5']), 7)
        .prop_map(|digits| digits.into_iter().collect())
}

/// A well-formed query.
pub fn query_strategy() -> impl Strategy<Value = PhoneQuery> {
    (area_code_strategy(), local_number_strategy())
        .prop_map(|(area, local)| PhoneQuery::new(area, local).expect("strategy yields digits"))
}

/// A corpus with unique `(area_code, local_number)` pairs, varied costs and ages.
pub fn corpus_strategy() -> impl Strategy<Value = InMemoryCorpus> {
    prop::collection::btree_map(
        (area_code_strategy(), local_number_strategy()),
        (0u64..5, 0i64..4),
        0..60,
    )
    .prop_map(|rows| {
        let entries: Vec<CorpusEntry> = rows
            .into_iter()
            .map(|((area, local), (cost, age))| {
                make_entry_at(&area, &local, cost * 100, 1_700_000_000 + age * 60)
            })
            .collect();
        InMemoryCorpus::new(entries).expect("unique pairs")
    })
}

/// Digit-like strings of any length, including empty.
pub fn digits_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{0,12}").unwrap()
}
