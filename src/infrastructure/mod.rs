//! # Infrastructure Layer
//!
//! Outbound integrations: supplier adapters and their transports.

pub mod suppliers;
