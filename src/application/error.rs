//! # Application Errors
//!
//! Error types for the application layer.
//!
//! A search fails either before dispatch, because the request breaks a
//! domain invariant, or during dispatch, because one supplier failed. In
//! the second case the results of every other supplier are discarded.
//!
//! # Error Hierarchy
//!
//! ```text
//! AggregationError
//! ├── InvalidSearch(DomainError)              - Rejected before dispatch
//! └── SupplierFailed { supplier, source }     - First supplier failure
//! ```
//!
//! # Examples
//!
//! ```
//! use deflight::application::error::AggregationError;
//! use deflight::domain::value_objects::Supplier;
//! use deflight::infrastructure::suppliers::SupplierError;
//!
//! let err = AggregationError::supplier_failed(
//!     Supplier::ToughJet,
//!     SupplierError::timeout("no answer"),
//! );
//! assert!(!err.is_validation());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::Supplier;
use crate::infrastructure::suppliers::error::SupplierError;
use thiserror::Error;

/// Error type for aggregated searches.
#[derive(Debug, Clone, Error)]
pub enum AggregationError {
    /// The search violated a domain invariant; no supplier was contacted.
    #[error("invalid search: {0}")]
    InvalidSearch(#[from] DomainError),

    /// A supplier failed, failing the whole search.
    #[error("{supplier} failed: {source}")]
    SupplierFailed {
        /// Supplier whose call failed.
        supplier: Supplier,
        /// Underlying failure.
        source: SupplierError,
    },
}

impl AggregationError {
    /// Creates a supplier failure.
    #[must_use]
    pub fn supplier_failed(supplier: Supplier, source: SupplierError) -> Self {
        Self::SupplierFailed { supplier, source }
    }

    /// Returns true if the search was rejected before dispatch.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSearch(_))
    }

    /// Returns the failing supplier, if any.
    #[must_use]
    pub fn supplier(&self) -> Option<Supplier> {
        match self {
            Self::InvalidSearch(_) => None,
            Self::SupplierFailed { supplier, .. } => Some(*supplier),
        }
    }
}

/// Result type for aggregated searches.
pub type AggregationResult<T> = Result<T, AggregationError>;
