//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Numeric Types
//!
//! - [`Fare`]: Non-negative decimal fare with two-decimal rendering
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//!
//! ## Domain Enums
//!
//! - [`AirportCode`]: Supported IATA airport codes
//! - [`CabinClass`]: Economy or Business
//! - [`Supplier`]: Integrated flight offer suppliers

pub mod arithmetic;
pub mod enums;
pub mod fare;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use enums::{AirportCode, CabinClass, ParseEnumError, Supplier};
pub use fare::Fare;
