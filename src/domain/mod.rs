//! # Domain Layer
//!
//! The canonical model of a flight search and its results.
//!
//! Nothing in this layer knows about individual suppliers' wire formats,
//! HTTP, or configuration.

pub mod entities;
pub mod errors;
pub mod value_objects;
