//! REST API layer built on Axum.
//!
//! Provides HTTP handlers for title search, per-movie recommendations, and
//! health. Includes middleware for request tracing, CORS, request timeouts,
//! and body size limits.

/// API error types mapped to HTTP status codes.
pub mod errors;
/// HTTP request handlers and application state.
pub mod handlers;
/// Request and response data transfer objects.
pub mod models;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use cinematch_core::config;
use handlers::AppState;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Builds the Axum router with all routes and middleware layers.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/search", get(handlers::search))
        .route(
            "/movies/:id/recommendations",
            get(handlers::recommendations),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(config::MAX_REQUEST_BODY_BYTES))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config::REQUEST_TIMEOUT_SECS,
        )))
        .with_state(state)
}
