//! # Domain Errors
//!
//! Error types raised by domain invariants.
//!
//! These errors are detected inside the canonical model before any
//! supplier is contacted, or while normalizing supplier figures into a
//! [`Fare`](crate::domain::value_objects::Fare).
//!
//! # Examples
//!
//! ```
//! use deflight::domain::errors::DomainError;
//! use chrono::NaiveDate;
//!
//! let err = DomainError::invalid_date_period(
//!     NaiveDate::from_ymd_opt(2030, 5, 10).unwrap(),
//!     NaiveDate::from_ymd_opt(2030, 5, 1).unwrap(),
//! );
//! assert!(err.is_validation());
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use chrono::NaiveDate;
use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Return date precedes the departure date.
    #[error("return date {return_date} is before departure date {departure_date}")]
    InvalidDatePeriod {
        /// Requested departure date.
        departure_date: NaiveDate,
        /// Requested return date.
        return_date: NaiveDate,
    },

    /// A fare could not be represented (negative or otherwise invalid).
    #[error("invalid fare: {0}")]
    InvalidFare(String),

    /// Passenger count must be at least one.
    #[error("invalid passenger count: {0}")]
    InvalidPassengerCount(u32),

    /// Fare arithmetic failed.
    #[error("fare arithmetic failed: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid date period error.
    #[must_use]
    pub fn invalid_date_period(departure_date: NaiveDate, return_date: NaiveDate) -> Self {
        Self::InvalidDatePeriod {
            departure_date,
            return_date,
        }
    }

    /// Creates an invalid fare error.
    #[must_use]
    pub fn invalid_fare(message: impl Into<String>) -> Self {
        Self::InvalidFare(message.into())
    }

    /// Returns true if the error stems from caller input rather than
    /// supplier data.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDatePeriod { .. } | Self::InvalidPassengerCount(_)
        )
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
