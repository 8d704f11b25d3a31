//! Result types returned by the search model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::total_pages;

/// Pagination metadata for one page of hits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Number of full pages (floor of `total_hits / page size`).
    pub total_pages: u64,
    /// The 1-based page that was requested.
    pub current_page: u64,
    /// Total number of matching documents.
    pub total_hits: u64,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Source documents, in engine order.
    pub hits: Vec<Value>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

impl SearchResult {
    /// Reshapes a raw engine search response.
    ///
    /// Each hit is replaced by its `_source`; hits without one are skipped.
    /// The total is read from `hits.total` as a number or as `{ "value": n }`.
    pub fn from_response(response: &Value, page: u64, count_per_page: u64) -> Self {
        let hits = response
            .get("hits")
            .and_then(|h| h.get("hits"))
            .and_then(Value::as_array)
            .map(|hits| {
                hits.iter()
                    .filter_map(|hit| hit.get("_source").cloned())
                    .collect()
            })
            .unwrap_or_default();

        let total_hits = response
            .get("hits")
            .and_then(|h| h.get("total"))
            .and_then(|t| t.as_u64().or_else(|| t.get("value").and_then(Value::as_u64)))
            .unwrap_or(0);

        Self {
            hits,
            meta: PageMeta {
                total_pages: total_pages(total_hits, count_per_page),
                current_page: page,
                total_hits,
            },
        }
    }

    /// Returns true when the page holds no hits.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
