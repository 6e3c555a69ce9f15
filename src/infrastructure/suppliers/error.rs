//! # Supplier Errors
//!
//! Error types for supplier adapter operations.
//!
//! This module provides error types for the outbound side of a search:
//! transport failures, malformed supplier payloads, and supplier codes the
//! adapter does not know how to map.
//!
//! # Examples
//!
//! ```
//! use deflight::infrastructure::suppliers::error::SupplierError;
//! use deflight::domain::value_objects::Supplier;
//!
//! let error = SupplierError::timeout("Request timed out after 5000ms");
//! assert!(error.is_transport());
//!
//! let error = SupplierError::unmapped_code(Supplier::CrazyAir, "cabinclass", "F");
//! assert!(error.is_contract_violation());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::Supplier;
use thiserror::Error;

/// Error type for supplier adapter operations.
#[derive(Debug, Clone, Error)]
pub enum SupplierError {
    /// Request timed out.
    #[error("supplier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error, including 5xx responses.
    #[error("supplier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The supplier rejected the request as invalid.
    #[error("supplier invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The supplier throttled the request.
    #[error("supplier rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// Payload could not be decoded or the status was unexpected.
    #[error("supplier protocol error: {message}")]
    ProtocolError {
        /// Error message.
        message: String,
    },

    /// The supplier sent a code outside its documented set.
    #[error("unmapped {field} value '{value}' from {supplier}")]
    UnmappedCode {
        /// Supplier that sent the value.
        supplier: Supplier,
        /// Field carrying the value.
        field: &'static str,
        /// Raw value received.
        value: String,
    },

    /// Internal adapter error.
    #[error("supplier internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl SupplierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Creates an unmapped code error.
    #[must_use]
    pub fn unmapped_code(
        supplier: Supplier,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::UnmappedCode {
            supplier,
            field,
            value: value.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Returns true if the supplier sent data the adapter's mapping does not
    /// cover. This is an integration defect, not a user error.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::UnmappedCode { .. })
    }

    /// Returns true if the failure happened on the wire or in decoding.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. }
                | Self::Connection { .. }
                | Self::InvalidRequest { .. }
                | Self::RateLimited { .. }
                | Self::ProtocolError { .. }
        )
    }
}

impl From<DomainError> for SupplierError {
    /// A supplier record that violates a domain rule (e.g. a negative fare)
    /// is a malformed response.
    fn from(error: DomainError) -> Self {
        Self::protocol_error(format!("invalid supplier data: {}", error))
    }
}

/// Result type for supplier operations.
pub type SupplierResult<T> = Result<T, SupplierError>;
