//! Reference oracles for differential testing.
//!
//! These are slow, obviously-correct implementations. The optimized code is
//! checked against them rather than against hand-computed expectations.

use phonerank::{CorpusEntry, InMemoryCorpus, PhoneQuery};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

/// Full-matrix Wagner-Fischer edit distance. O(nm) time and space.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution
        }
    }
    table[a.len()][b.len()]
}

/// Trigram Jaccard over owned `BTreeSet`s.
pub fn oracle_trigram_jaccard(a: &str, b: &str) -> f64 {
    fn grams(s: &str) -> BTreeSet<String> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 3 {
            return BTreeSet::from([s.to_string()]);
        }
        chars.windows(3).map(|w| w.iter().collect()).collect()
    }
    let set_a = grams(a);
    let set_b = grams(b);
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    set_a.intersection(&set_b).count() as f64 / union as f64
}

/// Brute-force related-number search.
///
/// Rebuilds the candidate pool by scanning the whole corpus, scores each
/// candidate with the oracles above and sorts by the four-key chain. Returns
/// `(full_number, distance, similarity, cost)` tuples.
pub fn oracle_search(
    corpus: &InMemoryCorpus,
    query: &PhoneQuery,
    limit: usize,
    fan_out: usize,
) -> Vec<(String, usize, f64, u64)> {
    let is_query = |e: &CorpusEntry| e.area_code == query.area_code && e.local_number == query.local_number;

    let mut pool: Vec<&CorpusEntry> = corpus
        .entries()
        .iter()
        .filter(|e| e.area_code == query.area_code && !is_query(e))
        .collect();

    if pool.len() < limit {
        let suffix = &query.local_number[query.local_number.len() - 4..];
        let mut seen: HashSet<_> = pool.iter().map(|e| e.id).collect();
        for entry in corpus.entries() {
            if pool.len() >= limit * fan_out {
                break;
            }
            if entry.local_number.ends_with(suffix) && !is_query(entry) && seen.insert(entry.id) {
                pool.push(entry);
            }
        }
    }

    let query_full = format!("{}{}", query.area_code, query.local_number);
    let mut scored: Vec<(&CorpusEntry, usize, f64)> = pool
        .into_iter()
        .map(|e| {
            let d = oracle_levenshtein(&query.local_number, &e.local_number);
            let s = oracle_trigram_jaccard(&query_full, &format!("{}{}", e.area_code, e.local_number));
            (e, d, s)
        })
        .collect();

    scored.sort_by(|a, b| {
        a.1.cmp(&b.1)
            .then(b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal))
            .then(a.0.cost.cmp(&b.0.cost))
            .then(b.0.created_at.cmp(&a.0.created_at))
    });
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(e, d, s)| (format!("{}{}", e.area_code, e.local_number), d, s, e.cost))
        .collect()
}
