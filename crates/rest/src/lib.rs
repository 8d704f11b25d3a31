//! # fundation-search-rest - HTTP surface of the Fundation search plugin
//!
//! This crate turns the search model from `fundation-search` into a plugin a
//! host application mounts: it resolves the plugin's configuration, serves
//! the search page, renders its view and maps errors to HTTP responses.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fundation_search_rest::{HostConfig, SearchPlugin, ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = HostConfig::load("config.json")?;
//!     let plugin = SearchPlugin::from_config(&config)?;
//!
//!     let server_config = ServerConfig::default();
//!     let app = create_app_with_config(&plugin, &server_config);
//!
//!     let listener = tokio::net::TcpListener::bind(server_config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | HTTP Method | URL Pattern |
//! |----------|-------------|-------------|
//! | search page | GET | `{mountPath}?q=[text]&page=[n]` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//!
//! The health endpoints are added by [`create_app_with_config`] only; a host
//! mounting the plugin with [`SearchPlugin::mount`] gets the search page alone.
//!
//! ## Architecture
//!
//! - [`config`] - Host and server configuration
//! - [`error`] - Error types and HTTP mapping
//! - [`state`] - Handler state
//! - [`view`] - View contexts and the rendering seam
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration
//! - [`plugin`] - Plugin entry point and mounting

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod plugin;
pub mod routing;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use config::{HostConfig, PluginConfig, ServerConfig};
pub use error::{RestError, RestResult};
pub use plugin::SearchPlugin;
pub use state::AppState;
pub use view::{JsonViewRenderer, SearchView, ViewRenderer};

use axum::Router;
use fundation_search::SearchEngine;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the standalone application serving one plugin.
///
/// Adds the health endpoints to the plugin's routes and wraps them in the
/// tracing, timeout and (optional) CORS layers.
pub fn create_app_with_config<E>(plugin: &SearchPlugin<E>, config: &ServerConfig) -> Router
where
    E: SearchEngine + 'static,
{
    info!(
        engine = plugin.model().engine().engine_name(),
        "Creating search server"
    );

    let router = plugin.mount(routing::create_health_routes(plugin.state()));

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "fundation_search={level},fundation_search_rest={level},fundation_search_server={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
