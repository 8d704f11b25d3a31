//! HTTP request handlers.
//!
//! - [`search`] - The search page
//! - [`health`] - Health check endpoints

pub mod health;
pub mod search;

pub use health::{health_handler, liveness_handler};
pub use search::search_page_handler;
