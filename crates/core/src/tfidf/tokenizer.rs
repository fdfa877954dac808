//! Tokenizer with stop word removal and n-gram extraction.
//!
//! Tokenizes text by lowercasing, splitting on non-alphanumeric characters,
//! and removing common English function words. Single-character tokens are
//! also discarded. Uses a zero-per-token allocation design via byte spans;
//! n-grams are materialized only when terms are extracted for weighting.

use crate::config;
use std::collections::HashSet;
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
        "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
        "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few",
        "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
        "him", "his", "how", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
        "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
        "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some",
        "such", "than", "that", "the", "their", "theirs", "them", "then", "there", "these",
        "they", "this", "those", "through", "to", "too", "under", "until", "up", "very", "was",
        "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
        "with", "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

/// Tokenized text: owns the lowercased buffer, provides &str slices via byte spans.
/// Only 1 heap allocation (the lowercased String) instead of N per-token Strings.
pub struct Tokens {
    buffer: String,
    spans: Vec<(u32, u32)>, // (start, end) byte offsets into buffer
}

impl Tokens {
    /// Returns an iterator over the token `&str` slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(|&(s, e)| &self.buffer[s as usize..e as usize])
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Materializes weighting terms: unigrams plus space-joined n-grams up to
    /// length `max_n`. N-grams are formed after stop-word removal, so
    /// "the matrix reloaded" yields the bigram "matrix reloaded".
    pub fn terms(&self, max_n: usize) -> Vec<String> {
        let tokens: Vec<&str> = self.iter().collect();
        let mut terms = Vec::with_capacity(tokens.len() * max_n);
        for n in 1..=max_n.max(1) {
            for gram in tokens.windows(n) {
                terms.push(gram.join(" "));
            }
        }
        terms
    }
}

/// Tokenize text: lowercase, split on non-alphanumeric, remove stop words
/// and single-character tokens. Zero per-token allocation.
pub fn tokenize(text: &str) -> Tokens {
    let buffer = text.to_lowercase();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in buffer.char_indices() {
        if c.is_alphanumeric() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start {
            let token = &buffer[s..i];
            if token.len() > 1 && !STOP_WORDS.contains(token) {
                spans.push((s as u32, i as u32));
            }
            start = None;
        }
    }
    // Handle last token (no trailing separator)
    if let Some(s) = start {
        let token = &buffer[s..];
        if token.len() > 1 && !STOP_WORDS.contains(token) {
            spans.push((s as u32, buffer.len() as u32));
        }
    }

    Tokens { buffer, spans }
}

/// Tokenizes and extracts weighting terms in one call, using the configured
/// maximum n-gram length.
pub fn extract_terms(text: &str) -> Vec<String> {
    tokenize(text).terms(config::NGRAM_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_removes_stop_words() {
        let tokens = tokenize("the matrix and the machines");
        let words: Vec<&str> = tokens.iter().collect();
        assert_eq!(words, vec!["matrix", "machines"]);
    }

    #[test]
    fn test_tokenize_drops_single_character_tokens() {
        let tokens = tokenize("x men 2");
        let words: Vec<&str> = tokens.iter().collect();
        assert_eq!(words, vec!["men"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("the of a").is_empty());
    }

    #[test]
    fn test_terms_include_bigrams_after_stop_word_removal() {
        let terms = tokenize("the matrix reloaded").terms(2);
        assert!(terms.contains(&"matrix".to_string()));
        assert!(terms.contains(&"reloaded".to_string()));
        assert!(terms.contains(&"matrix reloaded".to_string()));
    }

    #[test]
    fn test_terms_unigrams_only() {
        let terms = tokenize("toy story").terms(1);
        assert_eq!(terms, vec!["toy".to_string(), "story".to_string()]);
    }
}
