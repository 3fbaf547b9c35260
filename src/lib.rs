//! # Domain Search
//!
//! Domain name search service built with Axum: turns free-form user input
//! into a domain label, checks it across TLDs concurrently, and suggests
//! alternative names.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, TLD catalog, availability provider trait
//! - **Application Layer** ([`application`]) - Search orchestration and fan-out
//! - **Infrastructure Layer** ([`infrastructure`]) - Registry stand-in, timeout/retry decorator
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Input normalization (`HTTPS://WWW.Example.com/` becomes `example`)
//! - Concurrent availability lookups with request-order results
//! - Premium pricing and name suggestions
//! - Rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"       # Optional
//! export LOG_FORMAT="json"           # Optional
//!
//! cargo run
//! curl 'http://localhost:3000/api/domains/search?q=my%20cool%20site&tlds=.com,.io'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::SearchService;
    pub use crate::domain::catalog::TldCatalog;
    pub use crate::domain::entities::{SearchOutcome, TldEntry, Verdict};
    pub use crate::domain::providers::{AvailabilityProvider, ProviderError};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
