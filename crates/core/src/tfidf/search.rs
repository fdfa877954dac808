//! Cosine similarity search over the fitted title index.
//!
//! Scores every title against a free-text query and returns the top-n rows.
//! Both the query vector and the indexed title vectors are L2-normalized, so
//! the accumulated sparse dot product is the cosine similarity directly.

use crate::normalize::normalize_title;
use crate::tfidf::index::TitleIndex;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Searches titles by cosine similarity against `query`.
///
/// Returns (catalog row, score) pairs sorted by descending score, ties broken
/// by catalog row ascending. Every returned row scores at least `min_score`;
/// three empty-result cases, none of them errors: the query normalizes to
/// nothing, the query shares no vocabulary with the corpus, or the best
/// match scores strictly below `min_score`.
pub fn search_titles(
    index: &TitleIndex,
    query: &str,
    top_n: usize,
    min_score: f32,
) -> Vec<(u32, f32)> {
    let normalized = normalize_title(Some(query));
    if normalized.is_empty() || top_n == 0 {
        return Vec::new();
    }
    let query_vector = index.transform(&normalized);
    if query_vector.is_empty() {
        return Vec::new();
    }

    let mut scores: HashMap<u32, f32> = HashMap::with_capacity(256);
    for &(term_id, query_weight) in &query_vector {
        for posting in index.postings(term_id) {
            *scores.entry(posting.row).or_insert(0.0) += query_weight * posting.weight;
        }
    }

    let best = scores.values().fold(0.0f32, |acc, &s| acc.max(s));
    if best < min_score {
        return Vec::new();
    }

    // Partial sort: O(n log k) via min-heap of size k. `Reverse(row)` inside
    // the key makes the heap evict later catalog rows first on score ties.
    // The floor applies per row, not just to the maximum: weak partial
    // matches below it never enter the heap.
    let mut heap: std::collections::BinaryHeap<Reverse<(OrderedFloat<f32>, Reverse<u32>)>> =
        std::collections::BinaryHeap::with_capacity(top_n + 1);
    for (row, score) in scores {
        if score < min_score {
            continue;
        }
        heap.push(Reverse((OrderedFloat(score), Reverse(row))));
        if heap.len() > top_n {
            heap.pop();
        }
    }
    let mut results: Vec<(u32, f32)> = heap
        .into_iter()
        .map(|Reverse((s, Reverse(row)))| (row, s.0))
        .collect();
    results.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    results
}
