//! Test server construction.

use axum_test::TestServer;
use fundation_search_rest::{HostConfig, SearchPlugin, ServerConfig, create_app_with_config};
use serde_json::{Value, json};

use super::engine::ScriptedEngine;

/// Host configuration with the given `plugins.search` section.
pub fn host_config(search: Value) -> HostConfig {
    serde_json::from_value(json!({
        "elasticsearch": { "host": "localhost:9200" },
        "plugins": { "search": search }
    }))
    .expect("valid host configuration")
}

/// Three article documents.
pub fn articles() -> Vec<Value> {
    vec![
        json!({ "title": "Chocolate chip", "slug": "chocolate-chip" }),
        json!({ "title": "Oatmeal raisin", "slug": "oatmeal-raisin" }),
        json!({ "title": "Snickerdoodle", "slug": "snickerdoodle" }),
    ]
}

/// Builds a plugin over `engine` and serves it the way the standalone
/// server does.
pub fn serve(config: &HostConfig, engine: ScriptedEngine) -> (TestServer, SearchPlugin<ScriptedEngine>) {
    let plugin = SearchPlugin::new(config, engine);
    let app = create_app_with_config(&plugin, &ServerConfig::for_testing());
    let server = TestServer::new(app).expect("Failed to create test server");
    (server, plugin)
}
