//! # Supplier Traits
//!
//! Port definitions for supplier integrations.
//!
//! Two seams live here:
//!
//! - [`FlightSupplier`]: the capability the aggregation engine fans out to.
//!   Every integrated supplier implements it, translating between the
//!   canonical model and its own schema.
//! - [`SupplierTransport`]: the raw `send(native request) -> native records`
//!   call an adapter makes. HTTP and in-process sandbox implementations are
//!   swapped in per profile without touching the adapters.
//!
//! # Examples
//!
//! ```ignore
//! use deflight::infrastructure::suppliers::traits::FlightSupplier;
//! use deflight::infrastructure::suppliers::error::SupplierResult;
//!
//! #[derive(Debug)]
//! struct MySupplier { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl FlightSupplier for MySupplier {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{FlightSearch, FlightSearchResult};
use crate::domain::value_objects::Supplier;
use crate::infrastructure::suppliers::error::SupplierResult;
use async_trait::async_trait;
use std::fmt;

/// Trait defining the search capability of a supplier adapter.
///
/// # Error Handling
///
/// Transport failures are returned to the caller, never swallowed. A
/// record carrying a code outside the supplier's documented set fails the
/// call with `SupplierError::UnmappedCode` instead of being defaulted.
#[async_trait]
pub trait FlightSupplier: Send + Sync + fmt::Debug {
    /// Returns the supplier identity stamped on every result.
    fn supplier(&self) -> Supplier;

    /// Searches the supplier for offers matching `search`.
    ///
    /// # Errors
    ///
    /// - `SupplierError::Timeout` / `Connection` - Transport failed
    /// - `SupplierError::ProtocolError` - Response could not be decoded or
    ///   violated a domain rule
    /// - `SupplierError::UnmappedCode` - Response used an unknown code
    async fn search(&self, search: &FlightSearch) -> SupplierResult<Vec<FlightSearchResult>>;
}

/// Outbound call to a supplier in its native schema.
///
/// Implementations own connection details; the adapter only sees request
/// and response records.
#[async_trait]
pub trait SupplierTransport<Req, Resp>: Send + Sync + fmt::Debug
where
    Req: Send + Sync,
    Resp: Send,
{
    /// Sends `request` and returns the supplier's records.
    ///
    /// # Errors
    ///
    /// Returns a `SupplierError` when the call cannot be completed or the
    /// response cannot be decoded.
    async fn send(&self, request: &Req) -> SupplierResult<Vec<Resp>>;
}
