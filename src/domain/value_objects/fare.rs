//! # Fare Value Object
//!
//! Normalized, non-negative ticket price shared by every supplier.
//!
//! Fares keep their full decimal precision inside the engine. Rounding to
//! two places happens only when a fare is rendered for presentation.
//!
//! # Examples
//!
//! ```
//! use deflight::domain::value_objects::Fare;
//! use rust_decimal::Decimal;
//!
//! let fare = Fare::from_components(
//!     Decimal::new(100, 0),
//!     Decimal::new(10, 0),
//!     Decimal::new(10, 0),
//! ).unwrap();
//! assert_eq!(fare.to_display_string(), "100.00");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{CheckedArithmetic, apply_percentage_discount};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Number of decimal places used when rendering a fare.
pub const DISPLAY_DECIMALS: u32 = 2;

/// A non-negative fare in the normalized currency unit.
///
/// # Invariants
///
/// - Never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Fare(Decimal);

impl Fare {
    /// A zero fare.
    pub const ZERO: Fare = Fare(Decimal::ZERO);

    /// Creates a fare from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFare` if the amount is negative.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_fare(format!(
                "fare must not be negative, got {}",
                amount
            )));
        }
        Ok(Self(amount))
    }

    /// Builds a fare from supplier price components.
    ///
    /// The percentage discount is applied to the base price before the tax
    /// is added: `base * (1 - discount / 100) + tax`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the computation overflows, or
    /// `DomainError::InvalidFare` if the result is negative.
    pub fn from_components(base_price: Decimal, tax: Decimal, discount: Decimal) -> DomainResult<Self> {
        let discounted = apply_percentage_discount(base_price, discount)?;
        let total = discounted.safe_add(tax)?;
        Self::new(total)
    }

    /// Returns the raw decimal amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Renders the fare with exactly two decimal places.
    ///
    /// Midpoints round away from zero.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl TryFrom<Decimal> for Fare {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Fare {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn rejects_negative_amount() {
        let err = Fare::new(dec("-0.01")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFare(_)));
    }

    #[test]
    fn accepts_zero() {
        assert_eq!(Fare::new(Decimal::ZERO).unwrap(), Fare::ZERO);
    }

    #[test]
    fn components_apply_discount_before_tax() {
        let fare = Fare::from_components(dec("100"), dec("10"), dec("10")).unwrap();
        assert_eq!(fare.amount(), dec("100"));
        // Discounting after the tax would have produced 99.
        assert_ne!(fare.amount(), dec("99"));
    }

    #[test]
    fn components_second_sandbox_offer() {
        let fare = Fare::from_components(dec("95"), dec("15"), dec("10")).unwrap();
        assert_eq!(fare.amount(), dec("100.5"));
    }

    #[test]
    fn components_overflow_is_reported() {
        let err = Fare::from_components(Decimal::MAX, Decimal::MAX, Decimal::ZERO).unwrap_err();
        assert!(matches!(err, DomainError::Arithmetic(_)));
    }

    #[test]
    fn components_negative_total_is_rejected() {
        let err = Fare::from_components(dec("100"), dec("0"), dec("150")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFare(_)));
    }

    #[test]
    fn display_has_two_decimals() {
        assert_eq!(Fare::new(dec("100")).unwrap().to_string(), "100.00");
        assert_eq!(Fare::new(dec("99.9")).unwrap().to_string(), "99.90");
        assert_eq!(Fare::new(dec("99.985")).unwrap().to_string(), "99.99");
        assert_eq!(Fare::new(dec("99.984")).unwrap().to_string(), "99.98");
    }

    #[test]
    fn display_does_not_alter_amount() {
        let fare = Fare::new(dec("10.005")).unwrap();
        assert_eq!(fare.to_string(), "10.01");
        assert_eq!(fare.amount(), dec("10.005"));
    }

    #[test]
    fn deserialize_accepts_numbers_and_rejects_negatives() {
        let fare: Fare = serde_json::from_str("99.99").unwrap();
        assert_eq!(fare.amount(), dec("99.99"));
        assert!(serde_json::from_str::<Fare>("-5").is_err());
    }

    #[test]
    fn deserialize_keeps_decimal_precision() {
        let fare: Fare = serde_json::from_str("109.99").unwrap();
        assert_eq!(fare.amount(), dec("109.99"));

        let fare: Fare = serde_json::from_str("\"0.10\"").unwrap();
        assert_eq!(fare.to_string(), "0.10");
    }

    proptest! {
        #[test]
        fn component_fare_within_bounds(
            base in 0u32..1_000_000,
            tax in 0u32..100_000,
            discount in 0u32..=100,
        ) {
            let base = Decimal::new(i64::from(base), 2);
            let tax = Decimal::new(i64::from(tax), 2);
            let discount = Decimal::from(discount);

            let fare = Fare::from_components(base, tax, discount).unwrap();

            prop_assert!(fare.amount() >= tax);
            prop_assert!(fare.amount() <= base + tax);
        }
    }
}
