//! One corpus, many threads, no coordination.

use phonerank::corpus::seed::{generate, SeedOptions};
use phonerank::{search, InMemoryCorpus, PhoneQuery, RelatedNumberSearch, SearchConfig};
use std::sync::Arc;
use std::thread;

fn seeded(count: usize) -> InMemoryCorpus {
    InMemoryCorpus::new(
        generate(&SeedOptions {
            count,
            ..SeedOptions::default()
        })
        .unwrap(),
    )
    .unwrap()
}

#[test]
fn test_threads_share_one_corpus() {
    let corpus = Arc::new(seeded(1_000));
    let queries: Vec<PhoneQuery> = corpus
        .entries()
        .iter()
        .step_by(50)
        .map(|e| PhoneQuery::new(e.area_code.as_str(), e.local_number.as_str()).unwrap())
        .collect();

    let expected: Vec<_> = queries
        .iter()
        .map(|q| search(&*corpus, q, 10).unwrap())
        .collect();

    let handles: Vec<_> = queries
        .into_iter()
        .map(|query| {
            let corpus = Arc::clone(&corpus);
            thread::spawn(move || search(&corpus, &query, 10).unwrap())
        })
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), want);
    }
}

#[test]
fn test_batch_matches_sequential() {
    let corpus = seeded(1_000);
    let service = RelatedNumberSearch::new(&corpus, SearchConfig::default()).unwrap();
    let queries: Vec<PhoneQuery> = corpus
        .entries()
        .iter()
        .step_by(37)
        .map(|e| PhoneQuery::new(e.area_code.as_str(), e.local_number.as_str()).unwrap())
        .collect();

    let batch = service.search_batch(&queries, Some(5));
    assert_eq!(batch.len(), queries.len());
    for (query, result) in queries.iter().zip(batch) {
        assert_eq!(result.unwrap(), service.search(query, Some(5)).unwrap());
    }
}
