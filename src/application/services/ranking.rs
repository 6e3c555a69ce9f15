//! # Result Ranking
//!
//! Orders aggregated results for presentation.
//!
//! The aggregation engine returns offers in no particular order. Callers
//! apply a [`RankingStrategy`] before rendering so identical inputs always
//! produce identical output.

use crate::domain::entities::FlightSearchResult;
use std::fmt;

/// Strategy for ordering aggregated results.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Orders `results` in place, best first.
    fn rank(&self, results: &mut [FlightSearchResult]);

    /// Returns the name of this strategy.
    fn name(&self) -> &'static str;
}

/// Cheapest fare first.
///
/// The sort is stable: offers with equal fares keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestFareStrategy;

impl CheapestFareStrategy {
    /// Creates a new cheapest-fare strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for CheapestFareStrategy {
    fn rank(&self, results: &mut [FlightSearchResult]) {
        results.sort_by_key(FlightSearchResult::fare);
    }

    fn name(&self) -> &'static str {
        "cheapest_fare"
    }
}
