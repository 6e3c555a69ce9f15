//! # Checked Arithmetic
//!
//! Traits and utilities for safe fare arithmetic.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`apply_percentage_discount`] - Percentage reduction helper used by
//!   component-priced suppliers
//!
//! # Examples
//!
//! ```
//! use deflight::domain::value_objects::arithmetic::{CheckedArithmetic, ArithmeticError};
//! use rust_decimal::Decimal;
//!
//! let a = Decimal::new(100, 0);
//! let b = Decimal::ZERO;
//! assert_eq!(a.safe_div(b), Err(ArithmeticError::DivisionByZero));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for arithmetic operations.
///
/// Represents failures that can occur during checked arithmetic,
/// including overflow, underflow and division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow, underflow, or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

/// Reduces `amount` by `percent` percent: `amount * (1 - percent / 100)`.
///
/// # Errors
///
/// Returns an [`ArithmeticError`] if any intermediate step overflows.
///
/// # Examples
///
/// ```
/// use deflight::domain::value_objects::arithmetic::apply_percentage_discount;
/// use rust_decimal::Decimal;
///
/// let discounted = apply_percentage_discount(Decimal::new(100, 0), Decimal::new(10, 0)).unwrap();
/// assert_eq!(discounted, Decimal::new(90, 0));
/// ```
#[must_use = "this returns the result of the operation, without modifying the original"]
pub fn apply_percentage_discount(amount: Decimal, percent: Decimal) -> ArithmeticResult<Decimal> {
    let ratio = percent.safe_div(Decimal::ONE_HUNDRED)?;
    let factor = Decimal::ONE.safe_sub(ratio)?;
    amount.safe_mul(factor)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::Underflow.to_string(),
                "arithmetic underflow"
            );
            assert_eq!(
                ArithmeticError::DivisionByZero.to_string(),
                "division by zero"
            );
        }
    }

    mod checked_arithmetic_decimal {
        use super::*;

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_add(Decimal::ONE),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn safe_sub_underflow_fails() {
            assert_eq!(
                Decimal::MIN.safe_sub(Decimal::ONE),
                Err(ArithmeticError::Underflow)
            );
        }

        #[test]
        fn safe_mul_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::TWO),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn safe_div_by_zero_fails() {
            let a = Decimal::new(100, 0);
            assert_eq!(a.safe_div(Decimal::ZERO), Err(ArithmeticError::DivisionByZero));
        }
    }

    mod percentage_discount {
        use super::*;

        #[test]
        fn ten_percent_off_one_hundred() {
            let result = apply_percentage_discount(Decimal::new(100, 0), Decimal::new(10, 0));
            assert_eq!(result.unwrap(), Decimal::new(90, 0));
        }

        #[test]
        fn zero_discount_keeps_amount() {
            let amount = Decimal::new(12_345, 2);
            assert_eq!(
                apply_percentage_discount(amount, Decimal::ZERO).unwrap(),
                amount
            );
        }

        #[test]
        fn fractional_discount_is_exact() {
            // 80 * (1 - 12.5 / 100) = 70
            let result = apply_percentage_discount(Decimal::new(80, 0), Decimal::new(125, 1));
            assert_eq!(result.unwrap(), Decimal::new(70, 0));
        }

        #[test]
        fn full_discount_is_zero() {
            let result = apply_percentage_discount(Decimal::new(95, 0), Decimal::ONE_HUNDRED);
            assert!(result.unwrap().is_zero());
        }
    }
}
