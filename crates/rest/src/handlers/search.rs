//! Search page handler.
//!
//! Reads `q` and `page` from the query string, runs the model's `get`
//! operation with `q` as free-text input and renders the result. Any
//! failure of the search renders the empty fallback view; the client
//! never sees the error. A key given more than once takes its first value.

use axum::{
    extract::{OriginalUri, Query, State},
    response::Response,
};
use fundation_search::{GetParams, PageNumber, SearchEngine};
use tracing::{debug, warn};

use crate::error::{RestError, RestResult};
use crate::state::AppState;
use crate::view::SearchView;

/// Query string of the search page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPageQuery {
    /// Free-text query.
    pub q: Option<String>,

    /// 1-based page number, passed through for coercion by the model.
    pub page: Option<String>,
}

impl SearchPageQuery {
    /// Picks `q` and `page` out of decoded query pairs.
    ///
    /// The first occurrence of each key wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut query.q,
                "page" => &mut query.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// Handler for the search page.
///
/// # HTTP Request
///
/// `GET [mountPath]?q=[text]&page=[n]`
///
/// # Response
///
/// The rendered view. On success the context holds `query`, `articles`,
/// `meta`, `activeUrl` and `paginate`; on failure `query`, an empty
/// `articles` list and an empty `meta` object.
pub async fn search_page_handler<E>(
    State(state): State<AppState<E>>,
    OriginalUri(uri): OriginalUri,
    Query(pairs): Query<Vec<(String, String)>>,
) -> RestResult<Response>
where
    E: SearchEngine + 'static,
{
    let query = SearchPageQuery::from_pairs(pairs);
    debug!(q = ?query.q, page = ?query.page, "Processing search page request");

    let params = GetParams {
        input: query.q.clone(),
        page: query.page.map(PageNumber::Text),
        ..Default::default()
    };

    let view = match state.search().get(params).await {
        Ok(result) => SearchView::found(uri.path(), query.q, result),
        Err(err) => {
            warn!(error = %err, "Search failed, rendering empty results");
            SearchView::fallback(query.q)
        }
    };

    let context = view
        .to_context()
        .map_err(|e| RestError::view(state.view(), e))?;
    state.renderer().render(state.view(), &context)
}
