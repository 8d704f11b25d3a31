//! Search plugin route configuration.

use axum::{Router, routing::get};
use fundation_search::SearchEngine;
use tracing::info;

use crate::config::PluginConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the plugin's routes.
///
/// # Routes
///
/// - `GET {mountPath}` - Search page (only when `route` is enabled)
pub fn create_routes<E>(state: AppState<E>, config: &PluginConfig) -> Router
where
    E: SearchEngine + 'static,
{
    let router = Router::new();

    let router = if config.route {
        let path = config.route_path();
        info!(path = %path, "Registering search route");
        router.route(&path, get(handlers::search_page_handler::<E>))
    } else {
        info!("Search route disabled");
        router
    };

    router.with_state(state)
}

/// Creates the health check routes served by the standalone server.
///
/// # Routes
///
/// - `GET /health` - Engine health
/// - `GET /_liveness` - Liveness probe
pub fn create_health_routes<E>(state: AppState<E>) -> Router
where
    E: SearchEngine + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_handler::<E>))
        .route("/_liveness", get(handlers::liveness_handler))
        .with_state(state)
}
