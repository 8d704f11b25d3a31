//! Plugin entry point.
//!
//! [`SearchPlugin`] wires the host configuration into a search model and the
//! search page route. Hosts receive the model through [`SearchPlugin::model`]
//! and attach the route to their own router with [`SearchPlugin::mount`].
//!
//! ```rust,ignore
//! use fundation_search_rest::{HostConfig, SearchPlugin};
//!
//! let config = HostConfig::load("config.json")?;
//! let plugin = SearchPlugin::from_config(&config)?;
//!
//! // Share the model with the rest of the application.
//! let search = plugin.model();
//!
//! let app = plugin.mount(axum::Router::new());
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use fundation_search::backends::elasticsearch::ElasticsearchEngine;
use fundation_search::error::ConfigError;
use fundation_search::{Search, SearchEngine};
use tracing::info;

use crate::config::{HostConfig, PluginConfig};
use crate::routing;
use crate::state::AppState;
use crate::view::{JsonViewRenderer, ViewRenderer};

/// The search plugin: one model and the route serving it.
pub struct SearchPlugin<E> {
    config: PluginConfig,
    search: Arc<Search<E>>,
    renderer: Arc<dyn ViewRenderer>,
    view: PathBuf,
}

impl<E: SearchEngine + 'static> SearchPlugin<E> {
    /// Creates the plugin over an engine.
    ///
    /// The model takes its defaults from `plugins.search`. Views are
    /// rendered with [`JsonViewRenderer`] until another renderer is set.
    pub fn new(config: &HostConfig, engine: E) -> Self {
        let plugin_config = config.plugins.search.clone();
        let view = plugin_config.view_path(config.views.as_deref());
        let search = Arc::new(Search::new(engine, plugin_config.options.clone()));

        info!(
            model = %plugin_config.options.model_name,
            mount_path = %plugin_config.mount_path,
            route = plugin_config.route,
            view = %view.display(),
            "Search plugin initialized"
        );

        Self {
            config: plugin_config,
            search,
            renderer: Arc::new(JsonViewRenderer),
            view,
        }
    }

    /// Replaces the view renderer.
    pub fn with_renderer<R>(mut self, renderer: R) -> Self
    where
        R: ViewRenderer + 'static,
    {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Returns the search model for use elsewhere in the host.
    pub fn model(&self) -> Arc<Search<E>> {
        Arc::clone(&self.search)
    }

    /// Returns the resolved plugin settings.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Returns the handler state shared by the plugin's routes.
    pub fn state(&self) -> AppState<E> {
        AppState::new(
            Arc::clone(&self.search),
            Arc::clone(&self.renderer),
            self.view.clone(),
        )
    }

    /// Returns the plugin's routes.
    pub fn routes(&self) -> Router {
        routing::create_routes(self.state(), &self.config)
    }

    /// Attaches the plugin's routes to a host router.
    pub fn mount(&self, host: Router) -> Router {
        host.merge(self.routes())
    }
}

impl SearchPlugin<ElasticsearchEngine> {
    /// Creates the plugin with an Elasticsearch engine built from the host
    /// configuration.
    ///
    /// Fails when the `elasticsearch` section is missing.
    pub fn from_config(config: &HostConfig) -> Result<Self, ConfigError> {
        let es_config = config.elasticsearch()?.clone();
        info!(host = %es_config.host, "Connecting search plugin to Elasticsearch");

        let engine = ElasticsearchEngine::new(es_config)?;
        Ok(Self::new(config, engine))
    }
}
