//! In-memory engine that records every call.

use std::collections::HashSet;

use async_trait::async_trait;
use fundation_search::engine::{
    DeleteRequest, IndexRequest, MappingRequest, SearchEngine, SearchRequest, SuggestRequest,
};
use fundation_search::error::{EngineError, EngineResult};
use parking_lot::Mutex;
use serde_json::{Value, json};

/// One recorded engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(SearchRequest),
    Suggest(SuggestRequest),
    Index(IndexRequest),
    Delete(DeleteRequest),
    Bulk(Vec<Value>),
    IndexExists(String),
    DeleteIndex(String),
    CreateIndex(String),
    PutMapping(MappingRequest),
    HealthCheck,
}

type SearchResponder = Box<dyn Fn(&SearchRequest) -> Vec<Value> + Send + Sync>;

/// Engine double returning scripted answers.
///
/// Search responses wrap the documents chosen by the responder as hits,
/// with `hits.total` set to their count unless overridden.
pub struct RecordingEngine {
    calls: Mutex<Vec<Call>>,
    responder: SearchResponder,
    total_override: Option<u64>,
    suggest_response: Value,
    existing_indices: Mutex<HashSet<String>>,
    failure_status: Option<u16>,
}

impl Default for RecordingEngine {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responder: Box::new(|_| Vec::new()),
            total_override: None,
            suggest_response: json!({}),
            existing_indices: Mutex::new(HashSet::new()),
            failure_status: None,
        }
    }
}

impl RecordingEngine {
    /// Creates an engine answering searches with no hits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers searches with the documents returned by `responder`.
    pub fn with_search<F>(mut self, responder: F) -> Self
    where
        F: Fn(&SearchRequest) -> Vec<Value> + Send + Sync + 'static,
    {
        self.responder = Box::new(responder);
        self
    }

    /// Reports `total` as the hit count regardless of the documents returned.
    pub fn with_total(mut self, total: u64) -> Self {
        self.total_override = Some(total);
        self
    }

    /// Answers suggest calls with the given suggestion groups.
    pub fn with_suggest(mut self, response: Value) -> Self {
        self.suggest_response = response;
        self
    }

    /// Marks an index as existing.
    pub fn with_index(self, index: &str) -> Self {
        self.existing_indices.lock().insert(index.to_string());
        self
    }

    /// Fails every call with the given status.
    pub fn failing(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    /// Returns a snapshot of the recorded calls.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Returns the recorded search requests.
    pub fn searches(&self) -> Vec<SearchRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) -> EngineResult<()> {
        self.calls.lock().push(call);
        match self.failure_status {
            Some(status) => Err(EngineError::Status {
                engine: "recording",
                status,
                body: "scripted failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SearchEngine for RecordingEngine {
    fn engine_name(&self) -> &'static str {
        "recording"
    }

    async fn search(&self, request: SearchRequest) -> EngineResult<Value> {
        let documents = (self.responder)(&request);
        self.record(Call::Search(request))?;

        let total = self.total_override.unwrap_or(documents.len() as u64);
        let hits: Vec<Value> = documents
            .into_iter()
            .map(|doc| json!({ "_source": doc }))
            .collect();

        Ok(json!({ "hits": { "total": { "value": total, "relation": "eq" }, "hits": hits } }))
    }

    async fn suggest(&self, request: SuggestRequest) -> EngineResult<Value> {
        self.record(Call::Suggest(request))?;
        Ok(self.suggest_response.clone())
    }

    async fn index(&self, request: IndexRequest) -> EngineResult<Value> {
        let id = request.id.clone();
        self.record(Call::Index(request))?;
        Ok(json!({ "_id": id, "result": "created" }))
    }

    async fn delete(&self, request: DeleteRequest) -> EngineResult<Value> {
        let id = request.id.clone();
        self.record(Call::Delete(request))?;
        Ok(json!({ "_id": id, "result": "deleted" }))
    }

    async fn bulk(&self, lines: Vec<Value>) -> EngineResult<Value> {
        self.record(Call::Bulk(lines))?;
        Ok(json!({ "errors": false, "items": [] }))
    }

    async fn index_exists(&self, index: &str) -> EngineResult<bool> {
        self.record(Call::IndexExists(index.to_string()))?;
        Ok(self.existing_indices.lock().contains(index))
    }

    async fn delete_index(&self, index: &str) -> EngineResult<Value> {
        self.record(Call::DeleteIndex(index.to_string()))?;
        self.existing_indices.lock().remove(index);
        Ok(json!({ "acknowledged": true }))
    }

    async fn create_index(&self, index: &str) -> EngineResult<Value> {
        self.record(Call::CreateIndex(index.to_string()))?;
        self.existing_indices.lock().insert(index.to_string());
        Ok(json!({ "acknowledged": true, "index": index }))
    }

    async fn put_mapping(&self, request: MappingRequest) -> EngineResult<Value> {
        self.record(Call::PutMapping(request))?;
        Ok(json!({ "acknowledged": true }))
    }

    async fn health_check(&self) -> EngineResult<()> {
        self.record(Call::HealthCheck)
    }
}
