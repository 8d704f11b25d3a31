//! Route configuration.

pub mod search_routes;

pub use search_routes::{create_health_routes, create_routes};
