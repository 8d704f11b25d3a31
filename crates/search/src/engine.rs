//! The search engine seam.
//!
//! [`SearchEngine`] is the only place the model talks to the outside world.
//! Every method issues exactly one request and returns the engine's answer;
//! nothing here caches, retries or fans out.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::EngineResult;

/// A paginated search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Index to search.
    pub index: String,
    /// Document type, if any.
    pub doc_type: Option<String>,
    /// Engine search type, if any.
    pub search_type: Option<String>,
    /// Search body (`from`, `size`, `query`).
    pub body: Value,
}

/// A completion suggestion request.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestRequest {
    /// Index holding the completion field.
    pub index: String,
    /// Document type, if any.
    pub doc_type: Option<String>,
    /// Named suggesters, e.g. `{ "autocomplete": { ... } }`.
    pub body: Value,
}

/// A single-document write.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexRequest {
    /// Target index.
    pub index: String,
    /// Document type.
    pub doc_type: String,
    /// Document id; the engine assigns one when absent.
    pub id: Option<String>,
    /// The document.
    pub body: Value,
}

/// A single-document delete.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    /// Target index.
    pub index: String,
    /// Document type.
    pub doc_type: String,
    /// Document id.
    pub id: String,
}

/// A mapping update.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingRequest {
    /// Index receiving the mapping.
    pub index: String,
    /// Document type, if any.
    pub doc_type: Option<String>,
    /// Mapping definition.
    pub body: Value,
}

/// A search engine reachable over RPC.
///
/// Implementations hold one long-lived client handle and are shared
/// read-only across requests.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Returns a short name for logging and health output.
    fn engine_name(&self) -> &'static str;

    /// Runs a search and returns the raw response.
    async fn search(&self, request: SearchRequest) -> EngineResult<Value>;

    /// Runs suggesters and returns the response's suggestion groups,
    /// keyed by suggester name.
    async fn suggest(&self, request: SuggestRequest) -> EngineResult<Value>;

    /// Writes one document.
    async fn index(&self, request: IndexRequest) -> EngineResult<Value>;

    /// Deletes one document.
    async fn delete(&self, request: DeleteRequest) -> EngineResult<Value>;

    /// Submits pre-built bulk lines as one request.
    async fn bulk(&self, lines: Vec<Value>) -> EngineResult<Value>;

    /// Returns whether an index exists.
    async fn index_exists(&self, index: &str) -> EngineResult<bool>;

    /// Deletes an index.
    async fn delete_index(&self, index: &str) -> EngineResult<Value>;

    /// Creates an index.
    async fn create_index(&self, index: &str) -> EngineResult<Value>;

    /// Applies a mapping.
    async fn put_mapping(&self, request: MappingRequest) -> EngineResult<Value>;

    /// Checks that the engine is reachable and usable.
    async fn health_check(&self) -> EngineResult<()>;
}
