//! Global configuration constants for cinematch.
//!
//! All thresholds, result caps, and tuning parameters are defined here.
//! These are compile-time constants; runtime configuration is handled via
//! CLI arguments and environment variables in the server's `main.rs`.

/// Minimum rating for a user to count as having "liked" a movie.
///
/// MovieLens ratings run 0.5–5.0 in half-point steps; 4.0 and above is
/// treated as a positive preference everywhere in the engine.
pub const LIKED_THRESHOLD: f32 = 4.0;

/// Minimum number of titles a term must appear in to enter the vocabulary.
///
/// Terms seen in fewer titles are dropped at fit time. Prevents singleton
/// typo terms from dominating cosine similarity on very short title strings.
pub const MIN_DOC_FREQUENCY: usize = 2;

/// Maximum n-gram length extracted from titles (1 = unigrams only).
pub const NGRAM_MAX: usize = 2;

/// Default number of title search results.
pub const DEFAULT_TOP_N: usize = 10;

/// Maximum number of title search results per request.
pub const MAX_TOP_N: usize = 100;

/// Default cosine similarity floor for title search.
///
/// If the best match scores strictly below this, the search returns nothing.
pub const DEFAULT_MIN_SCORE: f32 = 0.2;

/// Default noise floor for the co-preference ranker.
///
/// Co-liked movies must be liked by strictly more than this fraction of the
/// seed movie's fans to survive into scoring.
pub const DEFAULT_MIN_SIMILAR_FRACTION: f32 = 0.10;

/// Maximum number of rows returned by the co-preference ranker.
pub const MAX_RECOMMENDATIONS: usize = 20;

/// Title index time-to-live in seconds.
///
/// The fitted index is reused across queries and rebuilt once it is older
/// than this. Rebuilding is idempotent (the source tables never change),
/// so the interval is a freshness policy, not a correctness requirement.
pub const INDEX_TTL_SECS: u64 = 3600;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3030;

/// Maximum length of a search query string in bytes.
pub const MAX_QUERY_LEN: usize = 512;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP request body size in bytes (64 KB — all endpoints are GET).
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
