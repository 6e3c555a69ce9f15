//! # Supplier Adapters
//!
//! Integrations with third-party flight offer suppliers.
//!
//! Each adapter translates the canonical [`FlightSearch`] into its
//! supplier's request schema, calls a [`SupplierTransport`], and maps every
//! returned record back into a [`FlightSearchResult`].
//!
//! # Supported Suppliers
//!
//! - [`CrazyAirAdapter`]: flat fares, local date-times, one-letter cabin codes
//! - [`ToughJetAdapter`]: component fares, UTC instants, no cabin class
//!
//! [`FlightSearch`]: crate::domain::entities::FlightSearch
//! [`FlightSearchResult`]: crate::domain::entities::FlightSearchResult

pub mod crazy_air;
pub mod error;
pub mod http_client;
pub mod registry;
pub mod sandbox;
pub mod tough_jet;
pub mod traits;

pub use crazy_air::{CrazyAirAdapter, CrazyAirSearchRequest, CrazyAirSearchResponse};
pub use error::{SupplierError, SupplierResult};
pub use http_client::{HttpClient, HttpTransport};
pub use registry::build_suppliers;
pub use sandbox::{SandboxCrazyAir, SandboxToughJet};
pub use tough_jet::{ToughJetAdapter, ToughJetSearchRequest, ToughJetSearchResponse};
pub use traits::{FlightSupplier, SupplierTransport};
