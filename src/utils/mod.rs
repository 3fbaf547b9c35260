//! Utility functions for label processing.
//!
//! - [`label_normalizer`] - Query normalization and label validation
//! - [`suggestions`] - Alternative label generation

pub mod label_normalizer;
pub mod suggestions;
