//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`FlightAggregationEngine`]: Concurrent fan-out of one search to every supplier
//! - [`RankingStrategy`]: Strategies for ordering aggregated results

pub mod flight_aggregation;
pub mod ranking;

pub use flight_aggregation::FlightAggregationEngine;
pub use ranking::{CheapestFareStrategy, RankingStrategy};
