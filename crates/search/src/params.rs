//! Parameter structs for each model operation.
//!
//! Field names follow the host application's camelCase keys so a parameter
//! object can be deserialized straight from JSON. Every struct except
//! [`MappingParams`] embeds a flattened [`Target`] that is filled from the
//! plugin defaults before validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::{Target, Targeted};

/// A page number as supplied by a caller: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageNumber {
    /// An already numeric page.
    Number(u64),
    /// A page taken verbatim from a query string.
    Text(String),
}

impl From<u64> for PageNumber {
    fn from(page: u64) -> Self {
        PageNumber::Number(page)
    }
}

impl From<&str> for PageNumber {
    fn from(page: &str) -> Self {
        PageNumber::Text(page.to_string())
    }
}

impl From<String> for PageNumber {
    fn from(page: String) -> Self {
        PageNumber::Text(page)
    }
}

/// Parameters for a paginated search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetParams {
    /// Index, type, page size, fields and search type.
    #[serde(flatten)]
    pub target: Target,

    /// A raw query DSL object; takes precedence over `input`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,

    /// Free text matched against `fields`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageNumber>,
}

impl GetParams {
    /// Creates a free-text search.
    pub fn input(input: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            ..Default::default()
        }
    }

    /// Creates a search with a raw query DSL object.
    pub fn query(query: Value) -> Self {
        Self {
            query: Some(query),
            ..Default::default()
        }
    }

    /// Sets the page.
    pub fn with_page(mut self, page: impl Into<PageNumber>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Replaces the target.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }
}

/// Parameters for indexing one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexParams {
    /// Index and type.
    #[serde(flatten)]
    pub target: Target,

    /// The document. Its `id` field, when present, becomes the document id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl IndexParams {
    /// Creates index parameters for a document.
    pub fn new(target: Target, body: Value) -> Self {
        Self {
            target,
            body: Some(body),
        }
    }
}

/// Parameters for deleting one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteParams {
    /// Index and type.
    #[serde(flatten)]
    pub target: Target,

    /// The document id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DeleteParams {
    /// Creates delete parameters for a document id.
    pub fn new(target: Target, id: impl Into<String>) -> Self {
        Self {
            target,
            id: Some(id.into()),
        }
    }
}

/// Parameters for a completion suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestParams {
    /// Index and type.
    #[serde(flatten)]
    pub target: Target,

    /// A raw suggester definition; takes precedence over `input`/`field`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggest: Option<Value>,

    /// Partial text to complete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Completion field to query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Maximum number of suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl SuggestParams {
    /// Creates a fuzzy completion request for `input` on `field`.
    pub fn completion(input: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            input: Some(input.into()),
            field: Some(field.into()),
            ..Default::default()
        }
    }
}

/// Parameters for a bulk request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkParams {
    /// Index and type applied to every item.
    #[serde(flatten)]
    pub target: Target,

    /// Bulk action name (`index`, `create`, `update`, `delete`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Documents to act on; each item's `id` field becomes its `_id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Value>>,
}

impl BulkParams {
    /// Creates a bulk request applying `action` to every item.
    pub fn new(target: Target, action: impl Into<String>, items: Vec<Value>) -> Self {
        Self {
            target,
            action: Some(action.into()),
            items: Some(items),
        }
    }
}

/// A mapping definition, forwarded to the engine without normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingParams {
    /// Index receiving the mapping.
    pub index: String,

    /// Document type the mapping applies to.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,

    /// The mapping body.
    pub body: Value,
}

macro_rules! impl_targeted {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Targeted for $ty {
                fn target_mut(&mut self) -> &mut Target {
                    &mut self.target
                }
            }
        )*
    };
}

impl_targeted!(GetParams, IndexParams, DeleteParams, SuggestParams, BulkParams);
