//! # REST Routes
//!
//! Router assembly for the REST API.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builds the REST router with request tracing.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/flights/search", post(handlers::search_flights))
        .route("/health", get(handlers::health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
