//! Domain layer containing search entities, the suffix catalog and the
//! availability capability.
//!
//! # Architecture
//!
//! - [`entities`] - Verdicts, catalog entries, search outcomes
//! - [`catalog`] - Read-only TLD table injected at startup
//! - [`providers`] - Availability lookup trait implemented by infrastructure
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Provider traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod catalog;
pub mod entities;
pub mod providers;
