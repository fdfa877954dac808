//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling
//! via Axum. Core result types convert into these at the HTTP boundary.

use cinematch_core::rank::RecommendationRow;
use cinematch_core::session::ScoredMovie;
use serde::{Deserialize, Serialize};

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text title query.
    pub q: String,
    /// Maximum number of results (default [`cinematch_core::config::DEFAULT_TOP_N`]).
    pub top_n: Option<usize>,
    /// Cosine similarity floor (default [`cinematch_core::config::DEFAULT_MIN_SCORE`]).
    pub min_score: Option<f32>,
}

/// Query parameters for `GET /movies/:id/recommendations`.
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    /// Noise floor on the fan co-like fraction
    /// (default [`cinematch_core::config::DEFAULT_MIN_SIMILAR_FRACTION`]).
    pub min_similar_fraction: Option<f32>,
}

/// One title search hit.
#[derive(Debug, Serialize)]
pub struct MovieHit {
    pub movie_id: u32,
    pub title: String,
    pub genres: Vec<String>,
    /// Cosine similarity to the query, in [0, 1].
    pub score: f32,
}

impl From<ScoredMovie> for MovieHit {
    fn from(hit: ScoredMovie) -> Self {
        Self {
            movie_id: hit.movie.id,
            title: hit.movie.title.clone(),
            genres: hit.movie.genres.clone(),
            score: hit.score,
        }
    }
}

/// Response body for `GET /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<MovieHit>,
}

/// Response body for `GET /movies/:id/recommendations`.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub movie_id: u32,
    pub title: String,
    pub recommendations: Vec<RecommendationRow>,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub movies: usize,
    pub ratings: usize,
    pub uptime_secs: u64,
    /// Age of the cached title index; absent until first query builds it.
    pub index_age_secs: Option<u64>,
}
