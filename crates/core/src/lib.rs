//! # cinematch-core
//!
//! Embeddable in-memory movie recommendation engine with TF-IDF title search
//! and collaborative co-preference ranking over MovieLens-style tables.
//!
//! This is the core library crate with zero async dependencies — suitable for
//! embedding directly in Rust binaries or other language bindings. The two
//! source tables (movies and ratings) are loaded once and never mutated;
//! every query is a pure, CPU-bound computation over them.

/// Movie and rating types, plus the immutable `Catalog` built at load time.
pub mod catalog;
/// Global configuration constants: thresholds, defaults, and tuning parameters.
pub mod config;
/// CSV input boundary: loads the movies and ratings tables.
pub mod loader;
/// Title normalization: accent stripping, lowercasing, punctuation removal.
pub mod normalize;
/// Co-preference ranker: movies over-represented among fans of a seed movie.
pub mod rank;
/// Query session: owns the tables and the time-cached title index.
pub mod session;
/// TF-IDF title search: tokenizer, fitted index, and cosine scoring.
pub mod tfidf;
