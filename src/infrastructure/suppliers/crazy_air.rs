//! # CrazyAir Adapter
//!
//! Integration with the CrazyAir search API.
//!
//! CrazyAir reports a flat fare per offer, local departure and arrival
//! date-times, and a one-letter cabin code:
//!
//! | Code | Cabin class |
//! |------|-------------|
//! | `E`  | Economy     |
//! | `B`  | Business    |
//!
//! Any other cabin code fails the search with
//! [`SupplierError::UnmappedCode`].

use crate::domain::entities::{FlightSearch, FlightSearchResult};
use crate::domain::value_objects::{AirportCode, CabinClass, Fare, Supplier};
use crate::infrastructure::suppliers::error::{SupplierError, SupplierResult};
use crate::infrastructure::suppliers::traits::{FlightSupplier, SupplierTransport};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Field name CrazyAir uses for the cabin code.
const CABIN_CLASS_FIELD: &str = "cabinclass";

/// Search request in CrazyAir's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrazyAirSearchRequest {
    /// Origin airport.
    pub origin: AirportCode,
    /// Destination airport.
    pub destination: AirportCode,
    /// Departure date.
    pub departure_date: NaiveDate,
    /// Return date, absent for one-way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    /// Number of passengers.
    pub passenger_count: u32,
}

impl From<&FlightSearch> for CrazyAirSearchRequest {
    fn from(search: &FlightSearch) -> Self {
        Self {
            origin: search.origin(),
            destination: search.destination(),
            departure_date: search.departure_date(),
            return_date: search.return_date(),
            passenger_count: search.passengers(),
        }
    }
}

/// One offer in CrazyAir's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrazyAirSearchResponse {
    /// Airline name.
    pub airline: String,
    /// Total fare.
    pub price: Decimal,
    /// Raw cabin code (`E` or `B`).
    #[serde(rename = "cabinclass")]
    pub cabin_class: String,
    /// Departure airport.
    pub departure_airport_code: AirportCode,
    /// Destination airport.
    pub destination_airport_code: AirportCode,
    /// Local departure date-time.
    pub departure_date: NaiveDateTime,
    /// Local arrival date-time of the return leg.
    #[serde(default)]
    pub arrival_date: Option<NaiveDateTime>,
}

impl CrazyAirSearchResponse {
    /// Maps this offer into the canonical result.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::UnmappedCode` for an unknown cabin code, or
    /// `SupplierError::ProtocolError` for a negative price.
    pub fn into_result(self) -> SupplierResult<FlightSearchResult> {
        let cabin_class: CrazyAirCabinClass = self.cabin_class.parse()?;
        let fare = Fare::new(self.price)?;

        Ok(FlightSearchResult::new(
            self.airline,
            Supplier::CrazyAir,
            Some(cabin_class.into()),
            fare,
            self.departure_airport_code,
            self.destination_airport_code,
            self.departure_date,
            self.arrival_date,
        ))
    }
}

/// CrazyAir's cabin codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrazyAirCabinClass {
    /// `E`: economy.
    Economy,
    /// `B`: business.
    Business,
}

impl CrazyAirCabinClass {
    /// Returns the wire code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Economy => "E",
            Self::Business => "B",
        }
    }
}

impl FromStr for CrazyAirCabinClass {
    type Err = SupplierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(Self::Economy),
            "B" => Ok(Self::Business),
            other => Err(SupplierError::unmapped_code(
                Supplier::CrazyAir,
                CABIN_CLASS_FIELD,
                other,
            )),
        }
    }
}

impl From<CrazyAirCabinClass> for CabinClass {
    fn from(value: CrazyAirCabinClass) -> Self {
        match value {
            CrazyAirCabinClass::Economy => CabinClass::Economy,
            CrazyAirCabinClass::Business => CabinClass::Business,
        }
    }
}

impl fmt::Display for CrazyAirCabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Transport carrying CrazyAir's native records.
pub type CrazyAirTransport = dyn SupplierTransport<CrazyAirSearchRequest, CrazyAirSearchResponse>;

/// Supplier adapter for CrazyAir.
#[derive(Debug, Clone)]
pub struct CrazyAirAdapter {
    transport: Arc<CrazyAirTransport>,
}

impl CrazyAirAdapter {
    /// Creates an adapter over the given transport.
    #[must_use]
    pub fn new(transport: Arc<CrazyAirTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl FlightSupplier for CrazyAirAdapter {
    fn supplier(&self) -> Supplier {
        Supplier::CrazyAir
    }

    async fn search(&self, search: &FlightSearch) -> SupplierResult<Vec<FlightSearchResult>> {
        let request = CrazyAirSearchRequest::from(search);
        let offers = self.transport.send(&request).await?;

        offers
            .into_iter()
            .map(CrazyAirSearchResponse::into_result)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::FlightSearchBuilder;
    use std::sync::Mutex;

    fn search() -> FlightSearch {
        FlightSearchBuilder::new(
            AirportCode::LHR,
            AirportCode::AMS,
            NaiveDate::from_ymd_opt(2030, 6, 10).unwrap(),
        )
        .return_date(NaiveDate::from_ymd_opt(2030, 6, 17).unwrap())
        .passengers(2)
        .build()
    }

    fn offer(price: &str, cabin: &str) -> CrazyAirSearchResponse {
        CrazyAirSearchResponse {
            airline: "Foo Airlines".to_string(),
            price: price.parse().unwrap(),
            cabin_class: cabin.to_string(),
            departure_airport_code: AirportCode::LHR,
            destination_airport_code: AirportCode::AMS,
            departure_date: NaiveDate::from_ymd_opt(2030, 6, 10)
                .unwrap()
                .and_hms_opt(7, 30, 0)
                .unwrap(),
            arrival_date: None,
        }
    }

    /// Records the last request and replies with fixed offers.
    #[derive(Debug, Default)]
    struct RecordingTransport {
        offers: Vec<CrazyAirSearchResponse>,
        last_request: Mutex<Option<CrazyAirSearchRequest>>,
    }

    #[async_trait]
    impl SupplierTransport<CrazyAirSearchRequest, CrazyAirSearchResponse> for RecordingTransport {
        async fn send(
            &self,
            request: &CrazyAirSearchRequest,
        ) -> SupplierResult<Vec<CrazyAirSearchResponse>> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            Ok(self.offers.clone())
        }
    }

    #[derive(Debug)]
    struct FailingTransport;

    #[async_trait]
    impl SupplierTransport<CrazyAirSearchRequest, CrazyAirSearchResponse> for FailingTransport {
        async fn send(
            &self,
            _request: &CrazyAirSearchRequest,
        ) -> SupplierResult<Vec<CrazyAirSearchResponse>> {
            Err(SupplierError::timeout("no answer"))
        }
    }

    #[test]
    fn request_mapping_renames_passenger_count() {
        let request = CrazyAirSearchRequest::from(&search());
        assert_eq!(request.origin, AirportCode::LHR);
        assert_eq!(request.destination, AirportCode::AMS);
        assert_eq!(request.passenger_count, 2);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["passengerCount"], 2);
        assert_eq!(json["departureDate"], "2030-06-10");
        assert_eq!(json["returnDate"], "2030-06-17");
    }

    #[test]
    fn one_way_request_omits_return_date() {
        let search = FlightSearchBuilder::new(
            AirportCode::LHR,
            AirportCode::AMS,
            NaiveDate::from_ymd_opt(2030, 6, 10).unwrap(),
        )
        .build();
        let json = serde_json::to_value(CrazyAirSearchRequest::from(&search)).unwrap();
        assert!(json.get("returnDate").is_none());
    }

    #[test]
    fn price_passes_through() {
        let result = offer("99.99", "E").into_result().unwrap();
        assert_eq!(result.fare().amount(), "99.99".parse::<Decimal>().unwrap());
        assert_eq!(result.supplier(), Supplier::CrazyAir);
        assert_eq!(result.cabin_class(), Some(CabinClass::Economy));
    }

    #[test]
    fn business_code_maps() {
        let result = offer("250", "B").into_result().unwrap();
        assert_eq!(result.cabin_class(), Some(CabinClass::Business));
    }

    #[test]
    fn unknown_cabin_code_fails_loudly() {
        let err = offer("99.99", "F").into_result().unwrap_err();
        assert!(err.is_contract_violation());
        assert!(matches!(
            err,
            SupplierError::UnmappedCode { ref value, .. } if value == "F"
        ));
    }

    #[test]
    fn cabin_codes_are_case_sensitive() {
        assert!("e".parse::<CrazyAirCabinClass>().is_err());
    }

    #[test]
    fn negative_price_is_protocol_error() {
        let err = offer("-1", "E").into_result().unwrap_err();
        assert!(matches!(err, SupplierError::ProtocolError { .. }));
    }

    #[test]
    fn response_decodes_wire_names() {
        let json = r#"{
            "airline": "Bar Airlines",
            "price": 109.99,
            "cabinclass": "E",
            "departureAirportCode": "LHR",
            "destinationAirportCode": "AMS",
            "departureDate": "2030-06-10T00:00:00",
            "arrivalDate": "2030-06-17T00:00:00"
        }"#;
        let response: CrazyAirSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.cabin_class, "E");
        assert_eq!(response.price, "109.99".parse::<Decimal>().unwrap());
        assert!(response.arrival_date.is_some());
    }

    #[tokio::test]
    async fn search_maps_every_offer() {
        let transport = Arc::new(RecordingTransport {
            offers: vec![offer("99.99", "E"), offer("109.99", "B")],
            ..Default::default()
        });
        let adapter = CrazyAirAdapter::new(transport.clone());

        let results = adapter.search(&search()).await.unwrap();

        assert_eq!(results.len(), 2);
        let sent = transport.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(sent, CrazyAirSearchRequest::from(&search()));
    }

    #[tokio::test]
    async fn search_fails_on_any_unmapped_offer() {
        let transport = Arc::new(RecordingTransport {
            offers: vec![offer("99.99", "E"), offer("109.99", "P")],
            ..Default::default()
        });
        let adapter = CrazyAirAdapter::new(transport);

        let err = adapter.search(&search()).await.unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[tokio::test]
    async fn transport_error_is_propagated() {
        let adapter = CrazyAirAdapter::new(Arc::new(FailingTransport));
        let err = adapter.search(&search()).await.unwrap_err();
        assert!(matches!(err, SupplierError::Timeout { .. }));
    }
}
