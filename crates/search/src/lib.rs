//! # fundation-search - Search model for the Fundation search plugin
//!
//! This crate holds everything the search plugin does besides HTTP: it fills
//! request parameters from plugin defaults, validates them, builds
//! Elasticsearch request bodies (multi-match queries, completion suggesters,
//! bulk batches, pagination offsets) and reshapes engine responses into a
//! paginated view model.
//!
//! All indexing, ranking and storage happen in the external engine. Each
//! operation issues one request through the [`SearchEngine`] seam and
//! returns either the reshaped answer or a [`SearchError`].
//!
//! ## Operations
//!
//! | Operation | Required parameters | Engine call |
//! |-----------|---------------------|-------------|
//! | [`Search::get`] | `index`, `countPerPage`, and `query` or `input`+`fields` | search |
//! | [`Search::index`] | `index`, `type`, `body` | index |
//! | [`Search::delete`] | `index`, `type`, `id` | delete |
//! | [`Search::suggest`] | `index`, and `suggest` or `input`+`field` | search with suggesters |
//! | [`Search::bulk`] | `index`, `type`, `action`, `items` | bulk |
//! | [`Search::delete_index`] | index name | exists, then delete |
//! | [`Search::create_index`] | index name | delete-if-exists, then create |
//! | [`Search::create_mapping`] | mapping definition | put mapping |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fundation_search::backends::elasticsearch::{ElasticsearchConfig, ElasticsearchEngine};
//! use fundation_search::{GetParams, Search, SearchOptions};
//!
//! let engine = ElasticsearchEngine::new(ElasticsearchConfig::new("localhost:9200"))?;
//! let search = Search::new(engine, SearchOptions::with_index("articles"));
//!
//! let page = search
//!     .get(GetParams::input("rust").with_page(2))
//!     .await?;
//! println!("{} of {} hits", page.hits.len(), page.meta.total_hits);
//! ```
//!
//! ## Architecture
//!
//! - [`options`] - Plugin defaults and the default-fill step
//! - [`params`] - Parameter structs per operation
//! - [`validation`] - Required-key and either/or checks, page coercion
//! - [`query`] - Request body builders and pagination arithmetic
//! - [`types`] - Result types
//! - [`engine`] - The engine seam
//! - [`backends`] - Engine implementations
//! - [`model`] - The search model
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod engine;
pub mod error;
pub mod model;
pub mod options;
pub mod params;
pub mod query;
pub mod types;
pub mod validation;

pub use engine::SearchEngine;
pub use error::{ConfigError, EngineError, ModelResult, SearchError, ValidationError};
pub use model::Search;
pub use options::{SearchOptions, Target};
pub use params::{
    BulkParams, DeleteParams, GetParams, IndexParams, MappingParams, PageNumber, SuggestParams,
};
pub use types::{PageMeta, SearchResult};
