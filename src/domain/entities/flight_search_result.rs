//! # Flight Search Result Entity
//!
//! One normalized offer produced by a supplier adapter.

use crate::domain::value_objects::{AirportCode, CabinClass, Fare, Supplier};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single flight offer in canonical form.
///
/// Origin and destination are echoed from the supplier response and are not
/// re-checked against the originating search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearchResult {
    airline: String,
    supplier: Supplier,
    cabin_class: Option<CabinClass>,
    fare: Fare,
    origin: AirportCode,
    destination: AirportCode,
    departure_date: NaiveDateTime,
    return_date: Option<NaiveDateTime>,
}

impl FlightSearchResult {
    /// Creates a new result.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        airline: impl Into<String>,
        supplier: Supplier,
        cabin_class: Option<CabinClass>,
        fare: Fare,
        origin: AirportCode,
        destination: AirportCode,
        departure_date: NaiveDateTime,
        return_date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            airline: airline.into(),
            supplier,
            cabin_class,
            fare,
            origin,
            destination,
            departure_date,
            return_date,
        }
    }

    /// Returns the operating airline.
    #[inline]
    #[must_use]
    pub fn airline(&self) -> &str {
        &self.airline
    }

    /// Returns the supplier that produced this offer.
    #[inline]
    #[must_use]
    pub fn supplier(&self) -> Supplier {
        self.supplier
    }

    /// Returns the cabin class, if the supplier reports one.
    #[inline]
    #[must_use]
    pub fn cabin_class(&self) -> Option<CabinClass> {
        self.cabin_class
    }

    /// Returns the normalized fare.
    #[inline]
    #[must_use]
    pub fn fare(&self) -> Fare {
        self.fare
    }

    /// Returns the origin airport.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    /// Returns the destination airport.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    /// Returns the local departure date-time.
    #[inline]
    #[must_use]
    pub fn departure_date(&self) -> NaiveDateTime {
        self.departure_date
    }

    /// Returns the local return date-time, absent for one-way offers.
    #[inline]
    #[must_use]
    pub fn return_date(&self) -> Option<NaiveDateTime> {
        self.return_date
    }
}

impl fmt::Display for FlightSearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} {}->{} @ {}",
            self.airline, self.supplier, self.origin, self.destination, self.fare
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn departure() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn result(cabin_class: Option<CabinClass>) -> FlightSearchResult {
        FlightSearchResult::new(
            "Foo Airlines",
            Supplier::CrazyAir,
            cabin_class,
            Fare::new(Decimal::new(9999, 2)).unwrap(),
            AirportCode::LHR,
            AirportCode::AMS,
            departure(),
            None,
        )
    }

    #[test]
    fn accessors() {
        let result = result(Some(CabinClass::Economy));
        assert_eq!(result.airline(), "Foo Airlines");
        assert_eq!(result.supplier(), Supplier::CrazyAir);
        assert_eq!(result.cabin_class(), Some(CabinClass::Economy));
        assert_eq!(result.fare().amount(), Decimal::new(9999, 2));
        assert_eq!(result.departure_date(), departure());
        assert!(result.return_date().is_none());
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(result(None), result(None));
        assert_ne!(result(None), result(Some(CabinClass::Business)));
    }

    #[test]
    fn display() {
        assert_eq!(
            result(None).to_string(),
            "Foo Airlines via CRAZY_AIR LHR->AMS @ 99.99"
        );
    }
}
