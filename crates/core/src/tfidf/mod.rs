//! TF-IDF title search: tokenizer, fitted index, and cosine scoring.
//!
//! Titles are tokenized into unigrams and bigrams (after stop-word removal),
//! weighted by smoothed TF-IDF, L2-normalized, and stored as an inverted
//! postings table. [`search_titles`] projects a free-text query into the
//! fitted space and scores every title by cosine similarity.

/// Fitted TF-IDF index over normalized titles.
pub mod index;
/// Cosine similarity search over the fitted index.
pub mod search;
/// Lowercasing alphanumeric tokenizer with stop-word removal and n-grams.
pub mod tokenizer;

pub use index::TitleIndex;
pub use search::search_titles;
