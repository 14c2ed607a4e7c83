//! Ranking precedence through the full search path.
//!
//! Each test isolates one link of the tie-break chain by holding the earlier
//! keys equal.

use crate::common::{corpus_of, make_entry_at, scenario_corpus, scenario_query};
use phonerank::{search, InMemoryCorpus, PhoneQuery};

#[test]
fn test_scenario_distance_order() {
    let results = search(&scenario_corpus(), &scenario_query(), 10).unwrap();
    assert!(results.len() >= 2);

    let near = results
        .iter()
        .position(|r| r.local_number == "5551235")
        .expect("distance-1 candidate present");
    for (pos, result) in results.iter().enumerate() {
        if result.distance > results[near].distance {
            assert!(near < pos, "5551235 should outrank {}", result.full_number);
        }
    }
    // Distances never decrease down the list
    assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn test_similarity_breaks_distance_ties() {
    // Both one substitution away; the change in the last digit keeps more
    // leading trigrams than the change in the middle
    let corpus = corpus_of(&[("415", "5551235", 500), ("415", "5591234", 1)]);
    let results = search(&corpus, &scenario_query(), 10).unwrap();

    assert_eq!(results[0].distance, 1);
    assert_eq!(results[1].distance, 1);
    assert!(results[0].similarity > results[1].similarity);
    assert_eq!(results[0].local_number, "5551235");
}

#[test]
fn test_cost_breaks_score_ties() {
    let corpus = corpus_of(&[("212", "5551234", 200), ("213", "5551234", 100)]);
    let results = search(&corpus, &scenario_query(), 10).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].similarity, results[1].similarity);
    assert_eq!(results[0].cost, 100);
    assert_eq!(results[1].cost, 200);
}

#[test]
fn test_newer_breaks_full_ties() {
    let corpus = InMemoryCorpus::new(vec![
        make_entry_at("212", "5551234", 100, 1_600_000_000),
        make_entry_at("213", "5551234", 100, 1_700_000_000),
    ])
    .unwrap();
    let results = search(&corpus, &scenario_query(), 10).unwrap();
    assert_eq!(results[0].area_code, "213");
    assert_eq!(results[1].area_code, "212");
}

#[test]
fn test_limit_truncates_after_sorting() {
    // The best match sits last in corpus order; truncation must not drop it
    let corpus = corpus_of(&[
        ("415", "0000000", 1),
        ("415", "0000001", 1),
        ("415", "5551239", 1),
    ]);
    let results = search(&corpus, &scenario_query(), 1).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].local_number, "5551239");
}

#[test]
fn test_result_shape() {
    let corpus = corpus_of(&[("415", "5551235", 150)]);
    let results = search(&corpus, &scenario_query(), 10).unwrap();
    let result = &results[0];
    assert_eq!(result.area_code, "415");
    assert_eq!(result.local_number, "5551235");
    assert_eq!(result.full_number, "4155551235");
    assert_eq!(result.cost, 150);
    assert_eq!(result.distance, 1);
    assert_eq!(result.similarity, 0.75);
}

#[test]
fn test_similarity_rounded_to_six_places() {
    // 5 shared trigrams of 9 distinct: 0.5555...
    let corpus = corpus_of(&[("415", "5551204", 1)]);
    let results = search(&corpus, &scenario_query(), 10).unwrap();
    assert_eq!(results[0].similarity, 0.555556);
    assert_eq!(results[0].distance, 1);
}

#[test]
fn test_cross_area_match_found_through_suffix() {
    // No other 415 numbers, so the 212 twin is reached by suffix widening
    let corpus = corpus_of(&[("415", "5551234", 1), ("212", "5551234", 1)]);
    let query = PhoneQuery::new("415", "5551234").unwrap();
    let results = search(&corpus, &query, 10).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].full_number, "2125551234");
    assert_eq!(results[0].distance, 0);
    assert_eq!(results[0].similarity, 0.5);
}
