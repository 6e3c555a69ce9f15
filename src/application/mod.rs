//! # Application Layer
//!
//! Search orchestration on top of the domain model and supplier adapters.

pub mod error;
pub mod services;

pub use error::{AggregationError, AggregationResult};
pub use services::{CheapestFareStrategy, FlightAggregationEngine, RankingStrategy};
