//! Scripted search engine for HTTP-level tests.

use async_trait::async_trait;
use fundation_search::engine::{
    DeleteRequest, IndexRequest, MappingRequest, SearchEngine, SearchRequest, SuggestRequest,
};
use fundation_search::error::{EngineError, EngineResult};
use parking_lot::Mutex;
use serde_json::{Value, json};

/// Engine answering every search with the same documents.
pub struct ScriptedEngine {
    documents: Vec<Value>,
    total: u64,
    failing: bool,
    searches: Mutex<Vec<SearchRequest>>,
}

impl ScriptedEngine {
    /// Answers searches with `documents` and reports `total` hits.
    pub fn new(documents: Vec<Value>, total: u64) -> Self {
        Self {
            documents,
            total,
            failing: false,
            searches: Mutex::new(Vec::new()),
        }
    }

    /// Engine whose every call fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(Vec::new(), 0)
        }
    }

    /// Returns the recorded search requests.
    pub fn searches(&self) -> Vec<SearchRequest> {
        self.searches.lock().clone()
    }

    fn check(&self) -> EngineResult<()> {
        if self.failing {
            Err(EngineError::Transport {
                engine: "scripted",
                message: "connection refused".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SearchEngine for ScriptedEngine {
    fn engine_name(&self) -> &'static str {
        "scripted"
    }

    async fn search(&self, request: SearchRequest) -> EngineResult<Value> {
        self.searches.lock().push(request);
        self.check()?;

        let hits: Vec<Value> = self
            .documents
            .iter()
            .map(|doc| json!({ "_source": doc }))
            .collect();
        Ok(json!({ "hits": { "total": { "value": self.total }, "hits": hits } }))
    }

    async fn suggest(&self, _request: SuggestRequest) -> EngineResult<Value> {
        self.check()?;
        Ok(json!({}))
    }

    async fn index(&self, _request: IndexRequest) -> EngineResult<Value> {
        self.check()?;
        Ok(json!({ "result": "created" }))
    }

    async fn delete(&self, _request: DeleteRequest) -> EngineResult<Value> {
        self.check()?;
        Ok(json!({ "result": "deleted" }))
    }

    async fn bulk(&self, _lines: Vec<Value>) -> EngineResult<Value> {
        self.check()?;
        Ok(json!({ "errors": false }))
    }

    async fn index_exists(&self, _index: &str) -> EngineResult<bool> {
        self.check()?;
        Ok(false)
    }

    async fn delete_index(&self, _index: &str) -> EngineResult<Value> {
        self.check()?;
        Ok(json!({ "acknowledged": true }))
    }

    async fn create_index(&self, _index: &str) -> EngineResult<Value> {
        self.check()?;
        Ok(json!({ "acknowledged": true }))
    }

    async fn put_mapping(&self, _request: MappingRequest) -> EngineResult<Value> {
        self.check()?;
        Ok(json!({ "acknowledged": true }))
    }

    async fn health_check(&self) -> EngineResult<()> {
        self.check()
    }
}
