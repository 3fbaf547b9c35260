//! Infrastructure layer for external integrations.
//!
//! Implements the provider traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`registry`] - Availability providers (registry stand-in and resilience decorator)

pub mod registry;
