//! # deflight
//!
//! Flight offer aggregation: one origin/destination/date search fanned out
//! to every integrated supplier, normalized into a single price-ordered
//! result list.
//!
//! # Layers
//!
//! - [`domain`]: canonical search and result model, fares, domain errors
//! - [`application`]: the aggregation engine and result ranking
//! - [`infrastructure`]: supplier adapters, HTTP and sandbox transports
//! - [`api`]: REST endpoints
//!
//! [`config`] and [`telemetry`] wire the service together in `main`.
//!
//! # Example
//!
//! ```ignore
//! use deflight::application::FlightAggregationEngine;
//! use deflight::config::{Profile, SuppliersConfig};
//! use deflight::domain::entities::FlightSearchBuilder;
//! use deflight::infrastructure::suppliers::build_suppliers;
//! use std::sync::Arc;
//!
//! let engine = FlightAggregationEngine::new(build_suppliers(&suppliers_config, Profile::Dev)?);
//! let search = FlightSearchBuilder::new(origin, destination, departure).try_build()?;
//! let offers = engine.search(&search).await?;
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
