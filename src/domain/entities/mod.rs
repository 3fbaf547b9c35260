//! Core domain entities for domain search.
//!
//! Entities are plain data structures without I/O. They are created per
//! request (labels, verdicts, search outcomes) or once at startup (catalog
//! entries) and never mutated afterwards.
//!
//! # Entity Types
//!
//! - [`TldEntry`] - A suffix offered for registration, with its base price
//! - [`Verdict`] - Availability and pricing of one label under one suffix
//! - [`SearchOutcome`] - Primary results plus suggestions for one query

pub mod search;
pub mod tld;
pub mod verdict;

pub use search::SearchOutcome;
pub use tld::TldEntry;
pub use verdict::Verdict;
