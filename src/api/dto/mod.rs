//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Response field names are camelCase.

pub mod health;
pub mod search;
pub mod tld;
