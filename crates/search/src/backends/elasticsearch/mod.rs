//! Elasticsearch backend implementation.
//!
//! Implements [`SearchEngine`](crate::engine::SearchEngine) on top of the
//! official `elasticsearch` client. One client handle is built at startup and
//! shared by every request; each engine call maps to exactly one HTTP request.
//!
//! # Example
//!
//! ```ignore
//! use fundation_search::backends::elasticsearch::{ElasticsearchConfig, ElasticsearchEngine};
//!
//! let config = ElasticsearchConfig {
//!     host: "localhost:9200".to_string(),
//!     ..Default::default()
//! };
//! let engine = ElasticsearchEngine::new(config)?;
//! engine.health_check().await?;
//! ```

mod backend;
mod engine;

pub use backend::{ElasticsearchAuth, ElasticsearchConfig, ElasticsearchEngine};
