//! # Domain Entities
//!
//! Canonical, supplier-agnostic request and result records.
//!
//! - [`FlightSearch`]: One origin/destination/date search
//! - [`FlightSearchResult`]: One normalized offer from a supplier

pub mod flight_search;
pub mod flight_search_result;

pub use flight_search::{FlightSearch, FlightSearchBuilder};
pub use flight_search_result::FlightSearchResult;
