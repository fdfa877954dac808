//! Fitted TF-IDF index over normalized titles.
//!
//! Maps vocabulary terms to column ids and stores per-title sparse weight
//! vectors as an inverted postings table (term id → (row, weight) pairs).
//! Weights are L2-normalized at fit time so cosine similarity reduces to a
//! sparse dot product at query time. The index is immutable once built and
//! reused across all queries until the session rebuilds it.

use crate::config;
use crate::tfidf::tokenizer::extract_terms;
use std::collections::HashMap;

/// A single entry in a term's postings list.
#[derive(Debug, Clone, Copy)]
pub struct Posting {
    /// Catalog row of the title containing this term.
    pub row: u32,
    /// L2-normalized TF-IDF weight of the term in that title.
    pub weight: f32,
}

/// Fitted TF-IDF weighting over a title corpus.
#[derive(Debug, Default)]
pub struct TitleIndex {
    /// term → column id. Terms below the document-frequency floor are absent.
    vocabulary: HashMap<String, u32>,
    /// Smoothed inverse document frequency, indexed by column id.
    idf: Vec<f32>,
    /// column id → postings, with pre-normalized weights.
    postings: Vec<Vec<Posting>>,
    /// Number of titles the index was fitted on.
    doc_count: u32,
}

impl TitleIndex {
    /// Fits the index on normalized titles.
    ///
    /// Extracts unigram and bigram terms, drops terms appearing in fewer
    /// than [`config::MIN_DOC_FREQUENCY`] titles, weights the rest by
    /// `tf * (ln((1 + n) / (1 + df)) + 1)`, and L2-normalizes each title's
    /// vector. An empty corpus produces an empty index, not an error.
    pub fn fit(titles: &[String]) -> Self {
        let n_docs = titles.len();

        // Pass 1: per-title term counts and corpus document frequencies.
        let mut doc_terms: Vec<HashMap<String, u32>> = Vec::with_capacity(n_docs);
        let mut doc_freq: HashMap<&str, u32> = HashMap::new();
        for title in titles {
            let mut counts: HashMap<String, u32> = HashMap::new();
            for term in extract_terms(title) {
                *counts.entry(term).or_insert(0) += 1;
            }
            doc_terms.push(counts);
        }
        for counts in &doc_terms {
            for term in counts.keys() {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Vocabulary: surviving terms in sorted order for determinism.
        let mut kept: Vec<&str> = doc_freq
            .iter()
            .filter(|&(_, &df)| df as usize >= config::MIN_DOC_FREQUENCY)
            .map(|(&term, _)| term)
            .collect();
        kept.sort_unstable();
        let vocabulary: HashMap<String, u32> = kept
            .iter()
            .enumerate()
            .map(|(id, &term)| (term.to_string(), id as u32))
            .collect();

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1.
        let mut idf = vec![0.0f32; vocabulary.len()];
        for (term, &id) in &vocabulary {
            let df = doc_freq[term.as_str()] as f32;
            idf[id as usize] = ((1.0 + n_docs as f32) / (1.0 + df)).ln() + 1.0;
        }

        // Pass 2: weight, normalize, and invert each title's vector.
        let mut postings: Vec<Vec<Posting>> = vec![Vec::new(); vocabulary.len()];
        for (row, counts) in doc_terms.iter().enumerate() {
            let mut vector: Vec<(u32, f32)> = counts
                .iter()
                .filter_map(|(term, &tf)| {
                    vocabulary
                        .get(term)
                        .map(|&id| (id, tf as f32 * idf[id as usize]))
                })
                .collect();
            let norm = vector.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
            if norm == 0.0 {
                continue; // title has no in-vocabulary terms
            }
            for (id, w) in &mut vector {
                *w /= norm;
                postings[*id as usize].push(Posting {
                    row: row as u32,
                    weight: *w,
                });
            }
        }

        Self {
            vocabulary,
            idf,
            postings,
            doc_count: n_docs as u32,
        }
    }

    /// Projects an already-normalized query into the fitted space.
    ///
    /// Returns the query's sparse L2-normalized vector as (column id, weight)
    /// pairs. Terms unseen at fit time contribute nothing; a query with no
    /// in-vocabulary terms yields an empty vector.
    pub fn transform(&self, normalized_query: &str) -> Vec<(u32, f32)> {
        let mut counts: HashMap<u32, f32> = HashMap::new();
        for term in extract_terms(normalized_query) {
            if let Some(&id) = self.vocabulary.get(&term) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }
        let mut vector: Vec<(u32, f32)> = counts
            .into_iter()
            .map(|(id, tf)| (id, tf * self.idf[id as usize]))
            .collect();
        let norm = vector.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm == 0.0 {
            return Vec::new();
        }
        for (_, w) in &mut vector {
            *w /= norm;
        }
        vector
    }

    /// Postings list for a column id.
    pub fn postings(&self, term_id: u32) -> &[Posting] {
        &self.postings[term_id as usize]
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of titles the index was fitted on.
    pub fn doc_count(&self) -> u32 {
        self.doc_count
    }

    #[cfg(test)]
    pub(crate) fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}
