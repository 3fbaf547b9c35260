//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod search;
pub mod tlds;

pub use health::health_handler;
pub use search::{search_get_handler, search_post_handler};
pub use tlds::{tld_handler, tld_list_handler};
