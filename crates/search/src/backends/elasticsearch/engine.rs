//! SearchEngine implementation for Elasticsearch.

use async_trait::async_trait;
use elasticsearch::cluster::ClusterHealthParts;
use elasticsearch::http::request::JsonBody;
use elasticsearch::http::response::Response;
use elasticsearch::indices::{
    IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts, IndicesPutMappingParts,
};
use elasticsearch::params::SearchType;
use elasticsearch::{BulkParts, DeleteParts, IndexParts, SearchParts};
use serde_json::{Value, json};

use crate::engine::{
    DeleteRequest, IndexRequest, MappingRequest, SearchEngine, SearchRequest, SuggestRequest,
};
use crate::error::{EngineError, EngineResult};

use super::backend::ElasticsearchEngine;

const ENGINE: &str = "elasticsearch";

fn transport_error(action: &str, err: elasticsearch::Error) -> EngineError {
    EngineError::Transport {
        engine: ENGINE,
        message: format!("{} failed: {}", action, err),
    }
}

/// Reads a JSON body from a successful response, or turns the status into an error.
async fn read_json(response: Response) -> EngineResult<Value> {
    let status = response.status_code();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(EngineError::Status {
            engine: ENGINE,
            status: status.as_u16(),
            body,
        });
    }

    response.json::<Value>().await.map_err(|e| EngineError::Decode {
        engine: ENGINE,
        message: e.to_string(),
    })
}

fn parse_search_type(search_type: &str) -> EngineResult<SearchType> {
    match search_type {
        "query_then_fetch" => Ok(SearchType::QueryThenFetch),
        "dfs_query_then_fetch" => Ok(SearchType::DfsQueryThenFetch),
        other => Err(EngineError::InvalidRequest {
            engine: ENGINE,
            message: format!("unsupported search type '{}'", other),
        }),
    }
}

#[async_trait]
impl SearchEngine for ElasticsearchEngine {
    fn engine_name(&self) -> &'static str {
        ENGINE
    }

    async fn search(&self, request: SearchRequest) -> EngineResult<Value> {
        tracing::debug!(
            index = %request.index,
            doc_type = ?request.doc_type,
            search_type = ?request.search_type,
            "Sending search request"
        );

        let indices = [request.index.as_str()];
        let mut search = self
            .client()
            .search(SearchParts::Index(&indices))
            .body(request.body);

        if let Some(search_type) = request.search_type.as_deref() {
            search = search.search_type(parse_search_type(search_type)?);
        }

        let response = search
            .send()
            .await
            .map_err(|e| transport_error("search", e))?;

        read_json(response).await
    }

    async fn suggest(&self, request: SuggestRequest) -> EngineResult<Value> {
        tracing::debug!(index = %request.index, "Sending suggest request");

        let indices = [request.index.as_str()];
        let response = self
            .client()
            .search(SearchParts::Index(&indices))
            .body(json!({
                "size": 0,
                "suggest": request.body,
            }))
            .send()
            .await
            .map_err(|e| transport_error("suggest", e))?;

        let body = read_json(response).await?;
        Ok(body.get("suggest").cloned().unwrap_or_else(|| json!({})))
    }

    async fn index(&self, request: IndexRequest) -> EngineResult<Value> {
        tracing::debug!(
            index = %request.index,
            doc_type = %request.doc_type,
            id = ?request.id,
            "Indexing document"
        );

        let parts = match request.id.as_deref() {
            Some(id) => IndexParts::IndexId(&request.index, id),
            None => IndexParts::Index(&request.index),
        };

        let response = self
            .client()
            .index(parts)
            .body(request.body)
            .send()
            .await
            .map_err(|e| transport_error("index", e))?;

        read_json(response).await
    }

    async fn delete(&self, request: DeleteRequest) -> EngineResult<Value> {
        tracing::debug!(
            index = %request.index,
            doc_type = %request.doc_type,
            id = %request.id,
            "Deleting document"
        );

        let response = self
            .client()
            .delete(DeleteParts::IndexId(&request.index, &request.id))
            .send()
            .await
            .map_err(|e| transport_error("delete", e))?;

        read_json(response).await
    }

    async fn bulk(&self, lines: Vec<Value>) -> EngineResult<Value> {
        tracing::debug!(lines = lines.len(), "Sending bulk request");

        let body: Vec<JsonBody<Value>> = lines.into_iter().map(JsonBody::new).collect();

        let response = self
            .client()
            .bulk(BulkParts::None)
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error("bulk", e))?;

        read_json(response).await
    }

    async fn index_exists(&self, index: &str) -> EngineResult<bool> {
        let response = self
            .client()
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| transport_error("index exists", e))?;

        let status = response.status_code();
        if status.is_success() {
            Ok(true)
        } else if status.as_u16() == 404 {
            Ok(false)
        } else {
            Err(EngineError::Status {
                engine: ENGINE,
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }

    async fn delete_index(&self, index: &str) -> EngineResult<Value> {
        let response = self
            .client()
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await
            .map_err(|e| transport_error("delete index", e))?;

        let body = read_json(response).await?;
        tracing::info!(index = %index, "Deleted Elasticsearch index");
        Ok(body)
    }

    async fn create_index(&self, index: &str) -> EngineResult<Value> {
        let response = self
            .client()
            .indices()
            .create(IndicesCreateParts::Index(index))
            .send()
            .await
            .map_err(|e| transport_error("create index", e))?;

        let body = read_json(response).await?;
        tracing::info!(index = %index, "Created Elasticsearch index");
        Ok(body)
    }

    async fn put_mapping(&self, request: MappingRequest) -> EngineResult<Value> {
        tracing::debug!(
            index = %request.index,
            doc_type = ?request.doc_type,
            "Putting mapping"
        );

        let indices = [request.index.as_str()];
        let response = self
            .client()
            .indices()
            .put_mapping(IndicesPutMappingParts::Index(&indices))
            .body(request.body)
            .send()
            .await
            .map_err(|e| transport_error("put mapping", e))?;

        read_json(response).await
    }

    async fn health_check(&self) -> EngineResult<()> {
        let response = self
            .client()
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(|e| transport_error("health check", e))?;

        let body = read_json(response).await?;

        let cluster_status = body
            .get("status")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown");

        if cluster_status == "red" {
            return Err(EngineError::Status {
                engine: ENGINE,
                status: 503,
                body: format!("cluster status is red: {}", body),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_type() {
        assert!(matches!(
            parse_search_type("query_then_fetch"),
            Ok(SearchType::QueryThenFetch)
        ));
        assert!(matches!(
            parse_search_type("dfs_query_then_fetch"),
            Ok(SearchType::DfsQueryThenFetch)
        ));
        assert!(matches!(
            parse_search_type("count"),
            Err(EngineError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn test_engine_name() {
        let engine = ElasticsearchEngine::new(super::super::ElasticsearchConfig::default()).unwrap();
        assert_eq!(engine.engine_name(), "elasticsearch");
    }
}
