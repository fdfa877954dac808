//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::models::*;
use axum::extract::{Path, Query, State};
use axum::Json;
use cinematch_core::config;
use cinematch_core::session::Session;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,
    pub start_time: Instant,
}

fn validate_fraction(name: &str, value: f32) -> Result<(), ApiError> {
    // NaN fails the range check as well.
    if !(0.0..=1.0).contains(&value) {
        return Err(ApiError::BadRequest(format!(
            "{name} must be between 0.0 and 1.0"
        )));
    }
    Ok(())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        movies: state.session.catalog().len(),
        ratings: state.session.rating_count(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        index_age_secs: state.session.index_age_secs(),
    })
}

/// `GET /search?q=...&top_n=...&min_score=...`
///
/// An empty or unmatched query returns 200 with an empty result list.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    if params.q.len() > config::MAX_QUERY_LEN {
        return Err(ApiError::BadRequest(format!(
            "Query must be at most {} bytes",
            config::MAX_QUERY_LEN
        )));
    }
    let top_n = params.top_n.unwrap_or(config::DEFAULT_TOP_N);
    if top_n == 0 || top_n > config::MAX_TOP_N {
        return Err(ApiError::BadRequest(format!(
            "top_n must be between 1 and {}",
            config::MAX_TOP_N
        )));
    }
    let min_score = params.min_score.unwrap_or(config::DEFAULT_MIN_SCORE);
    validate_fraction("min_score", min_score)?;

    state.session.refresh_if_stale();
    let results = state
        .session
        .search_titles(&params.q, top_n, min_score)
        .into_iter()
        .map(MovieHit::from)
        .collect();
    Ok(Json(SearchResponse {
        query: params.q,
        results,
    }))
}

/// `GET /movies/:id/recommendations?min_similar_fraction=...`
///
/// 404 for an unknown movie id; an empty recommendation list is a valid
/// 200 outcome (e.g. a movie nobody rated at the liked threshold).
pub async fn recommendations(
    State(state): State<AppState>,
    Path(movie_id): Path<u32>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let min_similar_fraction = params
        .min_similar_fraction
        .unwrap_or(config::DEFAULT_MIN_SIMILAR_FRACTION);
    validate_fraction("min_similar_fraction", min_similar_fraction)?;

    let movie = state
        .session
        .catalog()
        .get(movie_id)
        .ok_or_else(|| ApiError::NotFound(format!("Movie {movie_id} not found")))?;
    let title = movie.title.clone();

    let recommendations = state.session.recommend(movie_id, min_similar_fraction);
    Ok(Json(RecommendationsResponse {
        movie_id,
        title,
        recommendations,
    }))
}
