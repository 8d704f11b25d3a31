//! Test documents and plugin defaults.

use fundation_search::SearchOptions;
use serde_json::{Value, json};

/// Plugin defaults used by most tests.
pub fn options() -> SearchOptions {
    SearchOptions {
        index: Some("cookies".to_string()),
        count_per_page: 3,
        ..Default::default()
    }
}

/// A small collection of article documents.
pub fn collection() -> Vec<Value> {
    vec![
        json!({ "id": "1", "title": "Chocolate chip", "slug": "chocolate-chip", "summary": "Classic" }),
        json!({ "id": "2", "title": "Oatmeal raisin", "slug": "oatmeal-raisin", "summary": "Chewy" }),
        json!({ "id": "3", "title": "Snickerdoodle", "slug": "snickerdoodle", "summary": "Cinnamon" }),
        json!({ "id": "4", "title": "Shortbread", "slug": "shortbread", "summary": "Buttery" }),
        json!({ "id": "5", "title": "Gingersnap", "slug": "gingersnap", "summary": "Spiced" }),
    ]
}
