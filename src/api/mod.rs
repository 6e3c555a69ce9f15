//! # API Layer
//!
//! Inbound HTTP surface.

pub mod rest;
