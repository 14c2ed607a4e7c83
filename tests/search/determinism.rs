//! Same corpus snapshot, same query, same output.
//!
//! Ordering must not depend on hash iteration order or on how many times the
//! corpus has been queried.

use crate::common::{corpus_strategy, query_strategy};
use phonerank::corpus::seed::{generate, SeedOptions};
use phonerank::{search, InMemoryCorpus, PhoneQuery};
use proptest::prelude::*;

#[test]
fn test_repeated_search_on_seed_corpus() {
    let corpus = InMemoryCorpus::new(
        generate(&SeedOptions {
            count: 2_000,
            ..SeedOptions::default()
        })
        .unwrap(),
    )
    .unwrap();

    for entry in corpus.entries().iter().take(25) {
        let query = PhoneQuery::new(entry.area_code.as_str(), entry.local_number.as_str()).unwrap();
        let first = search(&corpus, &query, 10).unwrap();
        let second = search(&corpus, &query, 10).unwrap();
        assert_eq!(first, second, "search for {} changed between calls", query);
    }
}

#[test]
fn test_rebuilt_corpus_gives_same_results() {
    // Same rows in a different insertion order
    let entries = generate(&SeedOptions {
        count: 500,
        ..SeedOptions::default()
    })
    .unwrap();
    let mut reversed = entries.clone();
    reversed.reverse();

    let a = InMemoryCorpus::new(entries).unwrap();
    let b = InMemoryCorpus::new(reversed).unwrap();
    let query = PhoneQuery::new("415", "5551234").unwrap();
    assert_eq!(search(&a, &query, 10).unwrap(), search(&b, &query, 10).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_search_deterministic(corpus in corpus_strategy(), query in query_strategy(), limit in 1usize..12) {
        let first = search(&corpus, &query, limit).unwrap();
        let second = search(&corpus, &query, limit).unwrap();
        prop_assert_eq!(first, second);
    }
}
