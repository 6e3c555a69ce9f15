//! # ToughJet Adapter
//!
//! Integration with the ToughJet search API.
//!
//! ToughJet prices each offer as components (base price, tax, percentage
//! discount) and reports departure and return times as UTC instants. The
//! adapter rebuilds the fare as `base * (1 - discount / 100) + tax` and
//! converts instants to local date-times in the system timezone. ToughJet
//! does not report a cabin class.

use crate::domain::entities::{FlightSearch, FlightSearchResult};
use crate::domain::value_objects::{AirportCode, Fare, Supplier};
use crate::infrastructure::suppliers::error::SupplierResult;
use crate::infrastructure::suppliers::traits::{FlightSupplier, SupplierTransport};
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Search request in ToughJet's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToughJetSearchRequest {
    /// Origin airport.
    pub from: AirportCode,
    /// Destination airport.
    pub to: AirportCode,
    /// Outbound date.
    pub outbound_date: NaiveDate,
    /// Inbound date, absent for one-way.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_date: Option<NaiveDate>,
    /// Number of adult passengers.
    pub number_of_adults: u32,
}

impl From<&FlightSearch> for ToughJetSearchRequest {
    fn from(search: &FlightSearch) -> Self {
        Self {
            from: search.origin(),
            to: search.destination(),
            outbound_date: search.departure_date(),
            inbound_date: search.return_date(),
            number_of_adults: search.passengers(),
        }
    }
}

/// One offer in ToughJet's schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToughJetSearchResponse {
    /// Operating carrier.
    pub carrier: String,
    /// Price before discount and tax.
    pub base_price: Decimal,
    /// Tax added after the discount.
    pub tax: Decimal,
    /// Discount in percent of the base price.
    pub discount: Decimal,
    /// Departure airport.
    pub departure_airport_name: AirportCode,
    /// Arrival airport.
    pub arrival_airport_name: AirportCode,
    /// Outbound departure instant.
    pub outbound_date_time: DateTime<Utc>,
    /// Inbound departure instant.
    #[serde(default)]
    pub inbound_date_time: Option<DateTime<Utc>>,
}

impl ToughJetSearchResponse {
    /// Maps this offer into the canonical result using the system's local
    /// timezone.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::ProtocolError` if the fare components
    /// overflow or produce a negative fare.
    pub fn into_result(self) -> SupplierResult<FlightSearchResult> {
        self.into_result_in(&Local)
    }

    /// Maps this offer into the canonical result, rendering instants in
    /// `tz`.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::ProtocolError` if the fare components
    /// overflow or produce a negative fare.
    pub fn into_result_in<Tz: TimeZone>(self, tz: &Tz) -> SupplierResult<FlightSearchResult> {
        let fare = Fare::from_components(self.base_price, self.tax, self.discount)?;

        Ok(FlightSearchResult::new(
            self.carrier,
            Supplier::ToughJet,
            None,
            fare,
            self.departure_airport_name,
            self.arrival_airport_name,
            to_local(self.outbound_date_time, tz),
            self.inbound_date_time.map(|instant| to_local(instant, tz)),
        ))
    }
}

fn to_local<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> NaiveDateTime {
    instant.with_timezone(tz).naive_local()
}

/// Transport carrying ToughJet's native records.
pub type ToughJetTransport = dyn SupplierTransport<ToughJetSearchRequest, ToughJetSearchResponse>;

/// Supplier adapter for ToughJet.
#[derive(Debug, Clone)]
pub struct ToughJetAdapter {
    transport: Arc<ToughJetTransport>,
}

impl ToughJetAdapter {
    /// Creates an adapter over the given transport.
    #[must_use]
    pub fn new(transport: Arc<ToughJetTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl FlightSupplier for ToughJetAdapter {
    fn supplier(&self) -> Supplier {
        Supplier::ToughJet
    }

    async fn search(&self, search: &FlightSearch) -> SupplierResult<Vec<FlightSearchResult>> {
        let request = ToughJetSearchRequest::from(search);
        let offers = self.transport.send(&request).await?;

        offers
            .into_iter()
            .map(ToughJetSearchResponse::into_result)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::FlightSearchBuilder;
    use crate::infrastructure::suppliers::error::SupplierError;
    use chrono::FixedOffset;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn instant(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn offer(base: &str, tax: &str, discount: &str) -> ToughJetSearchResponse {
        ToughJetSearchResponse {
            carrier: "Foo Airlines".to_string(),
            base_price: dec(base),
            tax: dec(tax),
            discount: dec(discount),
            departure_airport_name: AirportCode::AMS,
            arrival_airport_name: AirportCode::LHR,
            outbound_date_time: instant("2030-06-10T06:00:00Z"),
            inbound_date_time: Some(instant("2030-06-17T22:30:00Z")),
        }
    }

    #[derive(Debug)]
    struct FixedTransport(Vec<ToughJetSearchResponse>);

    #[async_trait]
    impl SupplierTransport<ToughJetSearchRequest, ToughJetSearchResponse> for FixedTransport {
        async fn send(
            &self,
            _request: &ToughJetSearchRequest,
        ) -> SupplierResult<Vec<ToughJetSearchResponse>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn request_mapping_uses_toughjet_vocabulary() {
        let search = FlightSearchBuilder::new(
            AirportCode::AMS,
            AirportCode::LHR,
            NaiveDate::from_ymd_opt(2030, 6, 10).unwrap(),
        )
        .passengers(3)
        .build();

        let json = serde_json::to_value(ToughJetSearchRequest::from(&search)).unwrap();
        assert_eq!(json["from"], "AMS");
        assert_eq!(json["to"], "LHR");
        assert_eq!(json["outboundDate"], "2030-06-10");
        assert_eq!(json["numberOfAdults"], 3);
        assert!(json.get("inboundDate").is_none());
    }

    #[test]
    fn fare_is_rebuilt_from_components() {
        let result = offer("100", "10", "10").into_result_in(&Utc).unwrap();
        assert_eq!(result.fare().amount(), dec("100"));
        assert_eq!(result.fare().to_string(), "100.00");
    }

    #[test]
    fn fare_with_fractional_components() {
        // 95 * 0.9 + 15 = 100.5
        let result = offer("95", "15", "10").into_result_in(&Utc).unwrap();
        assert_eq!(result.fare().amount(), dec("100.5"));
    }

    #[test]
    fn negative_fare_is_protocol_error() {
        let err = offer("100", "0", "120").into_result_in(&Utc).unwrap_err();
        assert!(matches!(err, SupplierError::ProtocolError { .. }));
    }

    #[test]
    fn instants_are_rendered_in_the_given_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let result = offer("100", "10", "10").into_result_in(&plus_two).unwrap();

        assert_eq!(
            result.departure_date(),
            NaiveDate::from_ymd_opt(2030, 6, 10)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
        );
        // 22:30Z crosses midnight at +02:00.
        assert_eq!(
            result.return_date(),
            NaiveDate::from_ymd_opt(2030, 6, 18)
                .unwrap()
                .and_hms_opt(0, 30, 0)
        );
    }

    #[test]
    fn no_cabin_class_is_reported() {
        let result = offer("100", "10", "10").into_result_in(&Utc).unwrap();
        assert!(result.cabin_class().is_none());
        assert_eq!(result.supplier(), Supplier::ToughJet);
    }

    #[test]
    fn response_decodes_wire_names() {
        let json = r#"{
            "carrier": "Bar Airlines",
            "basePrice": 95,
            "tax": 15,
            "discount": 10,
            "departureAirportName": "AMS",
            "arrivalAirportName": "LHR",
            "outboundDateTime": "2030-06-10T00:00:00Z"
        }"#;
        let response: ToughJetSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.base_price, dec("95"));
        assert!(response.inbound_date_time.is_none());
    }

    #[test]
    fn fractional_wire_components_decode_exactly() {
        let json = r#"{
            "carrier": "Foo Airlines",
            "basePrice": 99.99,
            "tax": 0.1,
            "discount": 33.3,
            "departureAirportName": "LHR",
            "arrivalAirportName": "AMS",
            "outboundDateTime": "2030-06-10T00:00:00Z"
        }"#;
        let response: ToughJetSearchResponse = serde_json::from_str(json).unwrap();
        let result = response.into_result_in(&Utc).unwrap();

        // 99.99 * (1 - 0.333) + 0.1
        assert_eq!(result.fare().amount(), dec("66.79333"));
        assert_eq!(result.fare().to_string(), "66.79");
    }

    #[tokio::test]
    async fn search_maps_every_offer() {
        let adapter = ToughJetAdapter::new(Arc::new(FixedTransport(vec![
            offer("100", "10", "10"),
            offer("95", "15", "10"),
        ])));
        let search = FlightSearchBuilder::new(
            AirportCode::AMS,
            AirportCode::LHR,
            NaiveDate::from_ymd_opt(2030, 6, 10).unwrap(),
        )
        .build();

        let results = adapter.search(&search).await.unwrap();

        let fares: Vec<Decimal> = results.iter().map(|r| r.fare().amount()).collect();
        assert_eq!(fares, vec![dec("100"), dec("100.5")]);
    }
}
