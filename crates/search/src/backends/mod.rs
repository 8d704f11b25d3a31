//! Search engine backends.
//!
//! Backends are enabled through feature flags:
//!
//! - `elasticsearch` (default) - Elasticsearch via the official client

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;
