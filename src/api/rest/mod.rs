//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Flights
//! - `POST /flights/search` - Search every supplier, cheapest offer first
//!
//! ## Health
//! - `GET /health` - Liveness and registered supplier count
//!
//! # Usage
//!
//! ```ignore
//! use deflight::api::rest::{create_router, AppState};
//! use deflight::application::{CheapestFareStrategy, FlightAggregationEngine};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState::new(
//!     Arc::new(FlightAggregationEngine::new(suppliers)),
//!     Arc::new(CheapestFareStrategy::new()),
//! ));
//!
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, DataResponse, ErrorDetail, ErrorResponse, FlightSearchRequest,
    FlightSearchResponse, HealthResponse,
};
pub use routes::create_router;
