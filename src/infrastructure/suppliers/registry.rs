//! # Supplier Registry
//!
//! Builds the fixed supplier list handed to the aggregation engine.
//!
//! The `dev` profile wires every adapter to its sandbox transport. The
//! `prod` profile wires them to HTTP transports sharing one client.

use crate::config::{Profile, SuppliersConfig};
use crate::domain::value_objects::Supplier;
use crate::infrastructure::suppliers::crazy_air::CrazyAirAdapter;
use crate::infrastructure::suppliers::error::{SupplierError, SupplierResult};
use crate::infrastructure::suppliers::http_client::{HttpClient, HttpTransport};
use crate::infrastructure::suppliers::sandbox::{SandboxCrazyAir, SandboxToughJet};
use crate::infrastructure::suppliers::tough_jet::ToughJetAdapter;
use crate::infrastructure::suppliers::traits::FlightSupplier;
use std::sync::Arc;

/// Builds one adapter per integrated supplier for `profile`.
///
/// # Errors
///
/// Returns `SupplierError::InternalError` if the HTTP client cannot be
/// created or a `prod` supplier has no endpoint.
pub fn build_suppliers(
    config: &SuppliersConfig,
    profile: Profile,
) -> SupplierResult<Vec<Arc<dyn FlightSupplier>>> {
    let suppliers: Vec<Arc<dyn FlightSupplier>> = match profile {
        Profile::Dev => vec![
            Arc::new(CrazyAirAdapter::new(Arc::new(SandboxCrazyAir))),
            Arc::new(ToughJetAdapter::new(Arc::new(SandboxToughJet))),
        ],
        Profile::Prod => {
            let client = HttpClient::new(config.request_timeout_ms)?;
            vec![
                Arc::new(CrazyAirAdapter::new(Arc::new(http_transport(
                    &client,
                    config,
                    Supplier::CrazyAir,
                )?))),
                Arc::new(ToughJetAdapter::new(Arc::new(http_transport(
                    &client,
                    config,
                    Supplier::ToughJet,
                )?))),
            ]
        }
    };

    for supplier in &suppliers {
        tracing::info!(supplier = %supplier.supplier(), %profile, "registered supplier");
    }

    Ok(suppliers)
}

fn http_transport(
    client: &HttpClient,
    config: &SuppliersConfig,
    supplier: Supplier,
) -> SupplierResult<HttpTransport> {
    let endpoint = config.endpoint(supplier).ok_or_else(|| {
        SupplierError::internal_error(format!(
            "no endpoint configured for {} (suppliers.{}.endpoint)",
            supplier,
            supplier.config_key()
        ))
    })?;
    Ok(HttpTransport::new(client.clone(), endpoint))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::SupplierEndpoint;

    fn config(crazy_air: Option<&str>, tough_jet: Option<&str>) -> SuppliersConfig {
        SuppliersConfig {
            request_timeout_ms: 1000,
            crazy_air: SupplierEndpoint {
                endpoint: crazy_air.map(str::to_string),
            },
            tough_jet: SupplierEndpoint {
                endpoint: tough_jet.map(str::to_string),
            },
        }
    }

    fn identities(suppliers: &[Arc<dyn FlightSupplier>]) -> Vec<Supplier> {
        suppliers.iter().map(|s| s.supplier()).collect()
    }

    #[test]
    fn dev_registers_every_supplier_without_endpoints() {
        let suppliers = build_suppliers(&config(None, None), Profile::Dev).unwrap();
        assert_eq!(identities(&suppliers), Supplier::ALL.to_vec());
    }

    #[test]
    fn prod_registers_every_supplier() {
        let suppliers = build_suppliers(
            &config(Some("http://crazyair.local"), Some("http://toughjet.local")),
            Profile::Prod,
        )
        .unwrap();
        assert_eq!(identities(&suppliers), Supplier::ALL.to_vec());
    }

    #[test]
    fn prod_without_endpoint_fails() {
        let err = build_suppliers(&config(Some("http://crazyair.local"), None), Profile::Prod)
            .unwrap_err();
        assert!(matches!(err, SupplierError::InternalError { .. }));
        assert!(err.to_string().contains("tough_jet"));
    }
}
