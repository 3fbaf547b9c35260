//! Application layer services implementing the search workflow.
//!
//! Services consume the provider traits from the domain layer and give HTTP
//! handlers and the CLI a single entry point.
//!
//! # Available Services
//!
//! - [`services::search_service::SearchService`] - Query normalization, availability fan-out and suggestions

pub mod services;
