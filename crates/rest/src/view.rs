//! View contexts and the rendering seam.
//!
//! Template rendering belongs to the host. The plugin builds a
//! [`SearchView`] context and hands it to a [`ViewRenderer`] together with
//! the resolved view path. [`JsonViewRenderer`] is the bundled renderer: it
//! answers with the context itself as JSON, which is what API clients and
//! tests consume.

use std::path::Path;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fundation_search::SearchResult;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::RestResult;

/// Renders a view with a context into a response.
///
/// A renderer that cannot produce the page reports
/// [`RestError::View`](crate::error::RestError::View),
/// which answers with a 500 JSON error body.
pub trait ViewRenderer: Send + Sync {
    /// Renders `view` with `context`.
    fn render(&self, view: &Path, context: &Value) -> RestResult<Response>;
}

/// Renderer that answers with the context as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonViewRenderer;

impl ViewRenderer for JsonViewRenderer {
    fn render(&self, view: &Path, context: &Value) -> RestResult<Response> {
        tracing::trace!(view = %view.display(), "Rendering view as JSON");
        Ok((StatusCode::OK, Json(context.clone())).into_response())
    }
}

/// Context handed to the search page view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    /// The free-text query as received.
    pub query: Option<String>,

    /// Documents on the current page.
    pub articles: Vec<Value>,

    /// Pagination metadata; an empty object when the search failed.
    pub meta: Value,

    /// Link back to the search page for this query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_url: Option<String>,

    /// Whether the view should render page links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paginate: Option<bool>,
}

impl SearchView {
    /// Builds the context for a successful search.
    ///
    /// `path` is the request path without its query string.
    pub fn found(path: &str, query: Option<String>, result: SearchResult) -> Self {
        let active_url = format!("{}?q={}", path, query.as_deref().unwrap_or_default());
        let meta = serde_json::to_value(result.meta).unwrap_or_else(|_| Value::Object(Map::new()));

        Self {
            query,
            articles: result.hits,
            meta,
            active_url: Some(active_url),
            paginate: Some(true),
        }
    }

    /// Builds the context rendered when the search failed.
    pub fn fallback(query: Option<String>) -> Self {
        Self {
            query,
            articles: Vec::new(),
            meta: Value::Object(Map::new()),
            active_url: None,
            paginate: None,
        }
    }

    /// Converts the context into the value passed to a renderer.
    pub fn to_context(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
