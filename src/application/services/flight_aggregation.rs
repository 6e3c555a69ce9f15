//! # Flight Aggregation Engine
//!
//! Fans one search out to every registered supplier and merges the results.
//!
//! This module provides the [`FlightAggregationEngine`], which:
//!
//! 1. Validates the search before contacting anyone
//! 2. Calls every supplier concurrently with the same search
//! 3. Fails the whole search with the first supplier failure
//! 4. Flattens the per-supplier lists into one unordered list
//!
//! All supplier calls are driven by one joined future. When a call fails,
//! the calls still pending are dropped with it; nothing outlives the
//! search. Ordering is left to the caller (see
//! [`crate::application::services::ranking`]).

use crate::application::error::{AggregationError, AggregationResult};
use crate::domain::entities::{FlightSearch, FlightSearchResult};
use crate::infrastructure::suppliers::traits::FlightSupplier;
use futures::future::try_join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Engine aggregating offers from a fixed set of suppliers.
#[derive(Debug, Clone)]
pub struct FlightAggregationEngine {
    suppliers: Vec<Arc<dyn FlightSupplier>>,
}

impl FlightAggregationEngine {
    /// Creates an engine over `suppliers`.
    ///
    /// The list is fixed for the engine's lifetime and may be empty.
    #[must_use]
    pub fn new(suppliers: Vec<Arc<dyn FlightSupplier>>) -> Self {
        Self { suppliers }
    }

    /// Returns the number of registered suppliers.
    #[must_use]
    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }

    /// Searches every supplier and returns the union of their offers.
    ///
    /// The returned list is in no particular order.
    ///
    /// # Errors
    ///
    /// - `AggregationError::InvalidSearch` if `search` breaks a domain
    ///   invariant. No supplier is called.
    /// - `AggregationError::SupplierFailed` for the first supplier that
    ///   fails. Results from other suppliers are discarded.
    pub async fn search(
        &self,
        search: &FlightSearch,
    ) -> AggregationResult<Vec<FlightSearchResult>> {
        let span = tracing::info_span!(
            "flight_search",
            search_id = %Uuid::new_v4(),
            %search,
            suppliers = self.suppliers.len(),
        );

        async move {
            if let Err(e) = search.validate() {
                tracing::debug!(error = %e, "search rejected before dispatch");
                return Err(AggregationError::from(e));
            }

            let calls = self
                .suppliers
                .iter()
                .map(|supplier| Self::search_supplier(supplier.as_ref(), search));
            let batches = try_join_all(calls).await?;

            let results: Vec<FlightSearchResult> = batches.into_iter().flatten().collect();
            tracing::info!(results = results.len(), "search completed");
            Ok(results)
        }
        .instrument(span)
        .await
    }

    async fn search_supplier(
        supplier: &dyn FlightSupplier,
        search: &FlightSearch,
    ) -> AggregationResult<Vec<FlightSearchResult>> {
        let started = Instant::now();
        let identity = supplier.supplier();

        match supplier.search(search).await {
            Ok(results) => {
                tracing::debug!(
                    supplier = %identity,
                    results = results.len(),
                    elapsed_ms = %started.elapsed().as_millis(),
                    "supplier responded"
                );
                Ok(results)
            }
            Err(e) => {
                tracing::warn!(
                    supplier = %identity,
                    error = %e,
                    elapsed_ms = %started.elapsed().as_millis(),
                    "supplier failed"
                );
                Err(AggregationError::supplier_failed(identity, e))
            }
        }
    }
}
