//! The search model.
//!
//! [`Search`] owns the shared engine handle and the plugin defaults. Each
//! operation follows the same steps: fill defaults from [`SearchOptions`],
//! validate the required keys, build the engine request, issue exactly one
//! engine call (two for the index lifecycle helpers) and reshape the answer.
//!
//! Validation failures and engine failures are both returned as
//! [`SearchError`]; nothing is retried.

use std::fmt::Debug;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::engine::{
    DeleteRequest, IndexRequest, MappingRequest, SearchEngine, SearchRequest, SuggestRequest,
};
use crate::error::{ModelResult, ValidationError};
use crate::options::SearchOptions;
use crate::params::{BulkParams, DeleteParams, GetParams, IndexParams, MappingParams, SuggestParams};
use crate::query::{
    bulk_body, default_completion, default_multi_match, document_id, page_offset, search_body,
};
use crate::types::SearchResult;
use crate::validation::{parse_page, require_either_params, require_params};

/// Name of the suggester built by [`Search::suggest`].
pub const SUGGESTER_NAME: &str = "autocomplete";

/// Search model bound to one engine and one set of plugin defaults.
///
/// Cloning is cheap: clones share the engine handle.
pub struct Search<E> {
    engine: Arc<E>,
    options: Arc<SearchOptions>,
}

impl<E> Clone for Search<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            options: Arc::clone(&self.options),
        }
    }
}

impl<E> Debug for Search<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Search")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<E: SearchEngine> Search<E> {
    /// Creates a model over an engine.
    pub fn new(engine: E, options: SearchOptions) -> Self {
        Self::with_shared_engine(Arc::new(engine), options)
    }

    /// Creates a model over an engine handle that is shared elsewhere.
    pub fn with_shared_engine(engine: Arc<E>, options: SearchOptions) -> Self {
        debug!(
            model = %options.model_name,
            engine = engine.engine_name(),
            "Search model created"
        );
        Self {
            engine,
            options: Arc::new(options),
        }
    }

    /// Returns the name the model is exposed under.
    pub fn name(&self) -> &str {
        &self.options.model_name
    }

    /// Returns the plugin defaults.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Returns the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Runs a paginated search.
    ///
    /// Requires `index` and `countPerPage` (after defaults), plus either a raw
    /// `query` or an `input` with `fields`. Without a raw query a multi-match
    /// OR query over `fields` is used.
    pub async fn get(&self, params: GetParams) -> ModelResult<SearchResult> {
        let params = self.options.normalize(params);
        require_params(&params, &["index", "countPerPage"])?;
        require_either_params(&params, &["query"], &["input", "fields"])?;

        let page = parse_page(params.page.as_ref())?;
        let size = params.target.count_per_page.unwrap_or(self.options.count_per_page);

        let query = match params.query {
            Some(query) => query,
            None => default_multi_match(
                params.input.as_deref(),
                params.target.fields.as_deref().unwrap_or_default(),
            ),
        };

        let request = SearchRequest {
            index: params.target.index.unwrap_or_default(),
            doc_type: params.target.doc_type,
            search_type: params.target.search_type,
            body: search_body(page_offset(page, size), size, query),
        };

        debug!(index = %request.index, page, size, "Running search");

        let response = self.engine.search(request).await?;
        let result = SearchResult::from_response(&response, page, size);

        debug!(
            hits = result.hits.len(),
            total_hits = result.meta.total_hits,
            "Search completed"
        );

        Ok(result)
    }

    /// Indexes one document.
    ///
    /// Requires `index`, `type` and `body`. The document id is taken from
    /// `body.id` when present. The engine's answer is returned unmodified.
    pub async fn index(&self, params: IndexParams) -> ModelResult<Value> {
        let params = self.options.normalize(params);
        require_params(&params, &["index", "type", "body"])?;

        let body = params.body.unwrap_or_default();
        let request = IndexRequest {
            index: params.target.index.unwrap_or_default(),
            doc_type: params.target.doc_type.unwrap_or_default(),
            id: document_id(&body),
            body,
        };

        Ok(self.engine.index(request).await?)
    }

    /// Deletes one document.
    ///
    /// Requires `index`, `type` and `id`. The engine's answer is returned
    /// unmodified.
    pub async fn delete(&self, params: DeleteParams) -> ModelResult<Value> {
        let params = self.options.normalize(params);
        require_params(&params, &["index", "type", "id"])?;

        let request = DeleteRequest {
            index: params.target.index.unwrap_or_default(),
            doc_type: params.target.doc_type.unwrap_or_default(),
            id: params.id.unwrap_or_default(),
        };

        Ok(self.engine.delete(request).await?)
    }

    /// Returns completion options for partial input.
    ///
    /// Requires `index`, plus either a raw `suggest` definition or an `input`
    /// with a completion `field`. Returns the options of the first
    /// suggestion group, or an empty list when there is none.
    pub async fn suggest(&self, params: SuggestParams) -> ModelResult<Vec<Value>> {
        let params = self.options.normalize(params);
        require_params(&params, &["index"])?;
        require_either_params(&params, &["suggest"], &["input", "field"])?;

        let suggester = match params.suggest {
            Some(suggest) => suggest,
            None => default_completion(
                params.input.as_deref(),
                params.field.as_deref(),
                params.size,
            ),
        };

        let mut body = serde_json::Map::new();
        body.insert(SUGGESTER_NAME.to_string(), suggester);

        let request = SuggestRequest {
            index: params.target.index.unwrap_or_default(),
            doc_type: params.target.doc_type,
            body: Value::Object(body),
        };

        let response = self.engine.suggest(request).await?;

        let options = response
            .get(SUGGESTER_NAME)
            .and_then(|groups| groups.get(0))
            .and_then(|group| group.get("options"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(options)
    }

    /// Applies one action to many documents in a single bulk request.
    ///
    /// Requires `index`, `type`, `action` and `items`. Delete actions send
    /// descriptor lines only; every other action sends each item after its
    /// descriptor.
    pub async fn bulk(&self, params: BulkParams) -> ModelResult<Value> {
        let params = self.options.normalize(params);
        require_params(&params, &["index", "type", "action", "items"])?;

        let lines = bulk_body(
            params.target.index_name(),
            params.action.as_deref().unwrap_or_default(),
            params.items.as_deref().unwrap_or_default(),
        );

        debug!(
            index = %params.target.index_name(),
            action = ?params.action,
            lines = lines.len(),
            "Running bulk request"
        );

        Ok(self.engine.bulk(lines).await?)
    }

    /// Deletes an index if it exists.
    ///
    /// Returns `None` without deleting anything when the index is absent.
    pub async fn delete_index(&self, index: &str) -> ModelResult<Option<Value>> {
        if index.is_empty() {
            return Err(ValidationError::MissingParam {
                param: "index".to_string(),
            }
            .into());
        }

        if !self.engine.index_exists(index).await? {
            debug!(index = %index, "Index does not exist, nothing to delete");
            return Ok(None);
        }

        Ok(Some(self.engine.delete_index(index).await?))
    }

    /// Recreates an index from scratch.
    ///
    /// Always runs [`delete_index`](Self::delete_index) first, so any existing
    /// documents and mappings are dropped.
    pub async fn create_index(&self, index: &str) -> ModelResult<Value> {
        if self.delete_index(index).await?.is_some() {
            warn!(index = %index, "Existing index dropped before re-creation");
        }

        Ok(self.engine.create_index(index).await?)
    }

    /// Forwards a mapping definition to the engine unmodified.
    pub async fn create_mapping(&self, mapping: MappingParams) -> ModelResult<Value> {
        let request = MappingRequest {
            index: mapping.index,
            doc_type: mapping.doc_type,
            body: mapping.body,
        };

        Ok(self.engine.put_mapping(request).await?)
    }
}
