//! Plugin-level defaults and the single default-fill step.
//!
//! Every parameter struct embeds a [`Target`] describing where a request goes
//! (index, document type, page size, fields, search type). Before an
//! operation is validated, [`SearchOptions::fill`] copies the configured
//! default into each target field the caller left unset.
//!
//! # Default-fill rules
//!
//! | Target field | Filled from | Treated as unset when |
//! |--------------|-------------|-----------------------|
//! | `index` | `SearchOptions::index` | `None` or empty string |
//! | `doc_type` | `SearchOptions::doc_type` | `None` or empty string |
//! | `count_per_page` | `SearchOptions::count_per_page` | `None` or `0` |
//! | `fields` | `SearchOptions::fields` | `None` or empty list |
//! | `search_type` | `SearchOptions::search_type` | `None` or empty string |
//!
//! Caller-supplied values always win.

use serde::{Deserialize, Serialize};

/// Default number of hits per page.
pub const DEFAULT_COUNT_PER_PAGE: u64 = 24;

/// Default name the search model is exposed under.
pub const DEFAULT_MODEL_NAME: &str = "search";

/// Plugin defaults applied to every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Name the model is exposed under in the host application.
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Default index.
    #[serde(default)]
    pub index: Option<String>,

    /// Default document type.
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,

    /// Default page size.
    #[serde(default = "default_count_per_page")]
    pub count_per_page: u64,

    /// Default fields for free-text queries.
    #[serde(default)]
    pub fields: Vec<String>,

    /// Default search type (e.g. `dfs_query_then_fetch`).
    #[serde(default)]
    pub search_type: Option<String>,
}

fn default_model_name() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

fn default_count_per_page() -> u64 {
    DEFAULT_COUNT_PER_PAGE
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            index: None,
            doc_type: None,
            count_per_page: DEFAULT_COUNT_PER_PAGE,
            fields: Vec::new(),
            search_type: None,
        }
    }
}

/// Where a request is sent and how results are paged.
///
/// Flattened into every parameter struct, so the keys sit at the top level
/// of the caller's parameter object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Index to address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,

    /// Document type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,

    /// Hits per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_per_page: Option<u64>,

    /// Fields searched by free-text input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,

    /// Engine search type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_type: Option<String>,
}

impl Target {
    /// Creates a target addressing the given index.
    pub fn index(index: impl Into<String>) -> Self {
        Self {
            index: Some(index.into()),
            ..Default::default()
        }
    }

    /// Sets the document type.
    pub fn with_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Sets the page size.
    pub fn with_count_per_page(mut self, count: u64) -> Self {
        self.count_per_page = Some(count);
        self
    }

    /// Sets the searched fields.
    pub fn with_fields<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the index, or an empty string when unset.
    pub fn index_name(&self) -> &str {
        self.index.as_deref().unwrap_or_default()
    }
}

/// Implemented by every parameter struct that carries a [`Target`].
pub trait Targeted {
    /// Mutable access to the embedded target.
    fn target_mut(&mut self) -> &mut Target;
}

impl SearchOptions {
    /// Creates options with the given default index.
    pub fn with_index(index: impl Into<String>) -> Self {
        Self {
            index: Some(index.into()),
            ..Default::default()
        }
    }

    /// Fills every unset field of `target` from these options.
    pub fn fill(&self, target: &mut Target) {
        fill_string(&mut target.index, &self.index);
        fill_string(&mut target.doc_type, &self.doc_type);
        fill_string(&mut target.search_type, &self.search_type);

        if target.count_per_page.is_none_or(|count| count == 0) {
            target.count_per_page = Some(self.count_per_page).filter(|count| *count > 0);
        }

        if target.fields.as_ref().is_none_or(Vec::is_empty) && !self.fields.is_empty() {
            target.fields = Some(self.fields.clone());
        }
    }

    /// Applies [`fill`](Self::fill) to a parameter struct and returns it.
    pub fn normalize<P: Targeted>(&self, mut params: P) -> P {
        self.fill(params.target_mut());
        params
    }
}

fn fill_string(slot: &mut Option<String>, default: &Option<String>) {
    if slot.as_deref().is_none_or(str::is_empty) {
        *slot = default.clone().filter(|value| !value.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SearchOptions {
        SearchOptions {
            index: Some("cookies".to_string()),
            doc_type: Some("article".to_string()),
            count_per_page: 3,
            fields: vec!["title".to_string(), "body".to_string()],
            search_type: Some("dfs_query_then_fetch".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let options = SearchOptions::default();
        assert_eq!(options.count_per_page, 24);
        assert_eq!(options.model_name, "search");
        assert!(options.index.is_none());
    }

    #[test]
    fn test_fill_empty_target() {
        let mut target = Target::default();
        options().fill(&mut target);

        assert_eq!(target.index.as_deref(), Some("cookies"));
        assert_eq!(target.doc_type.as_deref(), Some("article"));
        assert_eq!(target.count_per_page, Some(3));
        assert_eq!(
            target.fields,
            Some(vec!["title".to_string(), "body".to_string()])
        );
        assert_eq!(target.search_type.as_deref(), Some("dfs_query_then_fetch"));
    }

    #[test]
    fn test_caller_values_win() {
        let mut target = Target::index("override")
            .with_type("recipe")
            .with_count_per_page(10)
            .with_fields(["name"]);
        options().fill(&mut target);

        assert_eq!(target.index.as_deref(), Some("override"));
        assert_eq!(target.doc_type.as_deref(), Some("recipe"));
        assert_eq!(target.count_per_page, Some(10));
        assert_eq!(target.fields, Some(vec!["name".to_string()]));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let mut target = Target {
            index: Some(String::new()),
            count_per_page: Some(0),
            fields: Some(vec![]),
            ..Default::default()
        };
        options().fill(&mut target);

        assert_eq!(target.index.as_deref(), Some("cookies"));
        assert_eq!(target.count_per_page, Some(3));
        assert_eq!(target.fields.map(|f| f.len()), Some(2));
    }

    #[test]
    fn test_unset_defaults_stay_unset() {
        let mut target = Target::default();
        SearchOptions::default().fill(&mut target);

        assert!(target.index.is_none());
        assert!(target.doc_type.is_none());
        assert!(target.fields.is_none());
        assert_eq!(target.count_per_page, Some(24));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: SearchOptions = serde_json::from_value(serde_json::json!({
            "index": "cookies",
            "type": "article",
            "countPerPage": 3,
            "searchType": "query_then_fetch"
        }))
        .unwrap();

        assert_eq!(options.count_per_page, 3);
        assert_eq!(options.doc_type.as_deref(), Some("article"));
        assert_eq!(options.model_name, "search");
    }
}
