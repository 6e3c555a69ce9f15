//! # Flight Search Entity
//!
//! The canonical search request handed to every supplier.
//!
//! # Examples
//!
//! ```
//! use deflight::domain::entities::FlightSearchBuilder;
//! use deflight::domain::value_objects::AirportCode;
//! use chrono::NaiveDate;
//!
//! let search = FlightSearchBuilder::new(
//!     AirportCode::LHR,
//!     AirportCode::AMS,
//!     NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
//! )
//! .return_date(NaiveDate::from_ymd_opt(2030, 6, 8).unwrap())
//! .passengers(2)
//! .try_build()
//! .unwrap();
//!
//! assert!(!search.is_one_way());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::AirportCode;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Passenger count used when the caller does not specify one.
pub const DEFAULT_PASSENGERS: u32 = 1;

/// A single origin/destination/date flight search.
///
/// Immutable once built; shared read-only by every concurrent supplier
/// call.
///
/// # Invariants
///
/// - `return_date`, when present, is not before `departure_date`
/// - `passengers` is at least one
///
/// Both invariants are checked by [`FlightSearch::validate`]. The
/// aggregation engine runs that check before dispatching, so an unchecked
/// value built with [`FlightSearchBuilder::build`] never reaches a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightSearch {
    origin: AirportCode,
    destination: AirportCode,
    departure_date: NaiveDate,
    return_date: Option<NaiveDate>,
    number_of_passengers: u32,
}

impl FlightSearch {
    /// Creates a validated flight search.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDatePeriod` if the return date precedes
    /// the departure date, or `DomainError::InvalidPassengerCount` if
    /// `passengers` is zero.
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        departure_date: NaiveDate,
        return_date: Option<NaiveDate>,
        passengers: u32,
    ) -> DomainResult<Self> {
        let search = Self {
            origin,
            destination,
            departure_date,
            return_date,
            number_of_passengers: passengers,
        };
        search.validate()?;
        Ok(search)
    }

    /// Checks the search invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDatePeriod` if the return date precedes
    /// the departure date, or `DomainError::InvalidPassengerCount` if the
    /// passenger count is zero.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(return_date) = self
            .return_date
            .filter(|return_date| *return_date < self.departure_date)
        {
            return Err(DomainError::invalid_date_period(
                self.departure_date,
                return_date,
            ));
        }
        if self.number_of_passengers == 0 {
            return Err(DomainError::InvalidPassengerCount(
                self.number_of_passengers,
            ));
        }
        Ok(())
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

    /// Returns the departure date.
    #[inline]
    #[must_use]
    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Returns the return date, if this is a round trip.
    #[inline]
    #[must_use]
    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    /// Returns the number of passengers.
    #[inline]
    #[must_use]
    pub fn passengers(&self) -> u32 {
        self.number_of_passengers
    }

    /// Returns true if no return date was requested.
    #[inline]
    #[must_use]
    pub fn is_one_way(&self) -> bool {
        self.return_date.is_none()
    }
}

impl fmt::Display for FlightSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{} on {}",
            self.origin, self.destination, self.departure_date
        )?;
        if let Some(return_date) = self.return_date {
            write!(f, " returning {}", return_date)?;
        }
        write!(f, " x{}", self.number_of_passengers)
    }
}

/// Builder for [`FlightSearch`].
#[derive(Debug, Clone)]
pub struct FlightSearchBuilder {
    origin: AirportCode,
    destination: AirportCode,
    departure_date: NaiveDate,
    return_date: Option<NaiveDate>,
    passengers: u32,
}

impl FlightSearchBuilder {
    /// Creates a new one-way, single-passenger builder.
    #[must_use]
    pub fn new(origin: AirportCode, destination: AirportCode, departure_date: NaiveDate) -> Self {
        Self {
            origin,
            destination,
            departure_date,
            return_date: None,
            passengers: DEFAULT_PASSENGERS,
        }
    }

    /// Sets the return date.
    #[must_use]
    pub fn return_date(mut self, return_date: NaiveDate) -> Self {
        self.return_date = Some(return_date);
        self
    }

    /// Sets or clears the return date.
    #[must_use]
    pub fn maybe_return_date(mut self, return_date: Option<NaiveDate>) -> Self {
        self.return_date = return_date;
        self
    }

    /// Sets the passenger count.
    #[must_use]
    pub fn passengers(mut self, passengers: u32) -> Self {
        self.passengers = passengers;
        self
    }

    /// Builds the search without validation.
    ///
    /// Use [`try_build`](Self::try_build) for validated construction.
    #[must_use]
    pub fn build(self) -> FlightSearch {
        FlightSearch {
            origin: self.origin,
            destination: self.destination,
            departure_date: self.departure_date,
            return_date: self.return_date,
            number_of_passengers: self.passengers,
        }
    }

    /// Builds the search with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if validation fails.
    pub fn try_build(self) -> DomainResult<FlightSearch> {
        FlightSearch::new(
            self.origin,
            self.destination,
            self.departure_date,
            self.return_date,
            self.passengers,
        )
    }
}
