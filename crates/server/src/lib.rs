//! cinematch-server — HTTP boundary for the cinematch engine.
//!
//! Serves title search and co-preference recommendations as JSON.
//! All recommendation logic lives in `cinematch-core`; this crate owns
//! startup, CSV loading, logging, and request/response marshalling.

/// REST API layer: Axum router, HTTP handlers, models, errors.
pub mod api;
