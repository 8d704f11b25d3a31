//! Request body builders and pagination arithmetic.

use serde_json::{Map, Value, json};

/// Bulk action that carries no document line.
pub const DELETE_ACTION: &str = "delete";

/// Returns the offset of the first hit on a 1-based `page`.
pub fn page_offset(page: u64, size: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(size)
}

/// Number of full pages for `total` hits.
///
/// Uses floor division, so a partial last page is not counted. Callers that
/// render page links may rely on this value, so it is kept as is.
pub fn total_pages(total: u64, size: u64) -> u64 {
    total.checked_div(size).unwrap_or(0)
}

/// Builds the free-text query used when the caller supplies no raw query.
pub fn default_multi_match(input: Option<&str>, fields: &[String]) -> Value {
    json!({
        "multi_match": {
            "query": input,
            "operator": "or",
            "fields": fields,
        }
    })
}

/// Builds a paginated search body.
pub fn search_body(from: u64, size: u64, query: Value) -> Value {
    json!({
        "from": from,
        "size": size,
        "query": query,
    })
}

/// Builds the fuzzy completion suggester used when no raw one is supplied.
pub fn default_completion(input: Option<&str>, field: Option<&str>, size: Option<u64>) -> Value {
    let mut completion = Map::new();
    completion.insert("field".to_string(), json!(field));
    if let Some(size) = size {
        completion.insert("size".to_string(), json!(size));
    }
    completion.insert("fuzzy".to_string(), Value::Bool(true));

    json!({
        "text": input,
        "completion": completion,
    })
}

/// Builds the ordered lines of a bulk request.
///
/// Each item contributes an action descriptor
/// `{ <action>: { "_index", "_id" } }` followed by the item itself.
/// `delete` actions contribute the descriptor only. Descriptors carry no
/// `_type`: typed bulk metadata is rejected by Elasticsearch 8.
pub fn bulk_body(index: &str, action: &str, items: &[Value]) -> Vec<Value> {
    let with_source = action != DELETE_ACTION;
    let mut lines = Vec::with_capacity(if with_source { items.len() * 2 } else { items.len() });

    for item in items {
        let mut descriptor = Map::new();
        descriptor.insert("_index".to_string(), json!(index));
        if let Some(id) = document_id(item) {
            descriptor.insert("_id".to_string(), json!(id));
        }

        let mut line = Map::new();
        line.insert(action.to_string(), Value::Object(descriptor));
        lines.push(Value::Object(line));

        if with_source {
            lines.push(item.clone());
        }
    }

    lines
}

/// Extracts a document id from an item's `id` field.
///
/// Strings and numbers are accepted; empty strings and other types are ignored.
pub fn document_id(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 3), 0);
        assert_eq!(page_offset(2, 3), 3);
        assert_eq!(page_offset(5, 24), 96);
    }

    #[test]
    fn test_total_pages_floors() {
        assert_eq!(total_pages(9, 3), 3);
        assert_eq!(total_pages(10, 3), 3);
        assert_eq!(total_pages(2, 3), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_default_multi_match() {
        let query = default_multi_match(Some("test"), &["title".to_string()]);
        assert_eq!(
            query,
            json!({
                "multi_match": { "query": "test", "operator": "or", "fields": ["title"] }
            })
        );
    }

    #[test]
    fn test_default_completion_omits_unset_size() {
        let suggester = default_completion(Some("choc"), Some("suggest"), None);
        assert_eq!(
            suggester,
            json!({ "text": "choc", "completion": { "field": "suggest", "fuzzy": true } })
        );

        let sized = default_completion(Some("choc"), Some("suggest"), Some(5));
        assert_eq!(sized["completion"]["size"], 5);
    }

    #[test]
    fn test_bulk_body_index_attaches_source() {
        let items = vec![json!({ "id": "a", "title": "A" }), json!({ "id": 2 })];
        let lines = bulk_body("cookies", "index", &items);

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            json!({ "index": { "_index": "cookies", "_id": "a" } })
        );
        assert!(lines[0]["index"].get("_type").is_none());
        assert_eq!(lines[1], items[0]);
        assert_eq!(lines[2]["index"]["_id"], "2");
        assert_eq!(lines[3], items[1]);
    }

    #[test]
    fn test_bulk_body_delete_has_no_source() {
        let items = vec![json!({ "id": "a" }), json!({ "id": "b" }), json!({ "id": "c" })];
        let lines = bulk_body("cookies", DELETE_ACTION, &items);

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.get("delete").is_some()));
    }

    #[test]
    fn test_bulk_body_without_id() {
        let lines = bulk_body("cookies", "create", &[json!({ "title": "x" })]);
        assert!(lines[0]["create"].get("_id").is_none());
    }
}
