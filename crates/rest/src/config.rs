//! Configuration for the search plugin and the server hosting it.
//!
//! Two layers are resolved here:
//!
//! - [`HostConfig`] is the host application's configuration file. The
//!   plugin reads its own section (`plugins.search`) and the top-level
//!   `elasticsearch` connection settings from it. Every plugin key has a
//!   default, so a host only lists what it overrides.
//! - [`ServerConfig`] holds process settings for the standalone server and
//!   is read from command line arguments or environment variables.
//!
//! # Plugin defaults
//!
//! | Key | Default |
//! |-----|---------|
//! | `plugins.search.countPerPage` | 24 |
//! | `plugins.search.mountPath` | `/search` |
//! | `plugins.search.modelName` | `search` |
//! | `plugins.search.route` | true |
//! | `plugins.search.viewFile` | bundled view |
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SEARCH_SERVER_PORT` | 8080 | Server port |
//! | `SEARCH_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `SEARCH_LOG_LEVEL` | info | Log level |
//! | `SEARCH_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SEARCH_ENABLE_CORS` | true | Enable CORS |
//! | `SEARCH_CORS_ORIGINS` | * | Allowed origins |
//! | `SEARCH_CONFIG` | config.json | Host configuration file |
//! | `SEARCH_VIEWS_DIR` | - | Directory holding host views |
//! | `SEARCH_ELASTICSEARCH_URL` | - | Overrides `elasticsearch.host` |
//!
//! # Example
//!
//! ```rust
//! use fundation_search_rest::config::HostConfig;
//!
//! let config = HostConfig::from_json(r#"{
//!     "elasticsearch": { "host": "localhost:9200" },
//!     "plugins": { "search": { "countPerPage": 3, "index": "articles" } }
//! }"#).unwrap();
//!
//! assert_eq!(config.plugins.search.options.count_per_page, 3);
//! assert_eq!(config.plugins.search.mount_path, "/search");
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use fundation_search::SearchOptions;
use fundation_search::backends::elasticsearch::ElasticsearchConfig;
use fundation_search::error::ConfigError;
use serde::{Deserialize, Serialize};

/// View rendered when the host does not configure `viewFile`.
pub const BUNDLED_VIEW: &str = "search/index.html";

/// Default route the search page is served on.
pub const DEFAULT_MOUNT_PATH: &str = "/search";

/// Process settings for the standalone search server.
///
/// Read from command line arguments and environment variables with
/// [`ServerConfig::parse`], or built programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "fundation-search")]
#[command(about = "Fundation search plugin server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SEARCH_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SEARCH_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "SEARCH_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "SEARCH_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "SEARCH_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "SEARCH_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Path to the host configuration file.
    #[arg(short, long, env = "SEARCH_CONFIG", default_value = "config.json")]
    pub config: PathBuf,

    /// Directory holding the host's views.
    #[arg(long, env = "SEARCH_VIEWS_DIR")]
    pub views_dir: Option<PathBuf>,

    /// Elasticsearch address, overriding the configuration file.
    #[arg(long, env = "SEARCH_ELASTICSEARCH_URL")]
    pub elasticsearch_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            config: PathBuf::from("config.json"),
            views_dir: None,
            elasticsearch_url: None,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.host.trim().is_empty() {
            errors.push("Host cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            ..Default::default()
        }
    }
}

/// The host application's configuration, as far as the plugin reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig {
    /// Engine connection settings. Required to start the plugin.
    #[serde(default)]
    pub elasticsearch: Option<ElasticsearchConfig>,

    /// Directory the host renders views from.
    #[serde(default)]
    pub views: Option<PathBuf>,

    /// Per-plugin sections.
    #[serde(default)]
    pub plugins: Plugins,
}

/// The `plugins` section of the host configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    /// Settings of the search plugin.
    #[serde(default)]
    pub search: PluginConfig,
}

/// Settings of the search plugin, merged over the defaults.
///
/// The model options sit at the top level of the plugin section next to the
/// routing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Model defaults: index, type, page size, fields and search type.
    #[serde(flatten)]
    pub options: SearchOptions,

    /// Path the search page is served on.
    #[serde(default = "default_mount_path")]
    pub mount_path: String,

    /// Whether the search page route is registered.
    #[serde(default = "default_route")]
    pub route: bool,

    /// View file, relative to the host's views directory.
    #[serde(default)]
    pub view_file: Option<String>,
}

fn default_mount_path() -> String {
    DEFAULT_MOUNT_PATH.to_string()
}

fn default_route() -> bool {
    true
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            options: SearchOptions::default(),
            mount_path: default_mount_path(),
            route: default_route(),
            view_file: None,
        }
    }
}

impl PluginConfig {
    /// Returns the mount path as a router path.
    ///
    /// A missing leading slash is added; an empty path mounts at `/`.
    pub fn route_path(&self) -> String {
        let path = self.mount_path.trim();
        if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        }
    }

    /// Resolves the view to render.
    ///
    /// A configured `viewFile` is resolved under `views_dir` (or the working
    /// directory when the host has none). Otherwise the bundled view is used.
    pub fn view_path(&self, views_dir: Option<&Path>) -> PathBuf {
        match self.view_file.as_deref().filter(|file| !file.is_empty()) {
            Some(file) => views_dir.unwrap_or_else(|| Path::new(".")).join(file),
            None => PathBuf::from(BUNDLED_VIEW),
        }
    }
}

impl HostConfig {
    /// Loads the host configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parses the host configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })
    }

    /// Returns the engine connection settings.
    ///
    /// Their absence is a startup error.
    pub fn elasticsearch(&self) -> Result<&ElasticsearchConfig, ConfigError> {
        self.elasticsearch
            .as_ref()
            .ok_or(ConfigError::MissingElasticsearch)
    }

    /// Applies process-level overrides from the server settings.
    pub fn apply_overrides(&mut self, server: &ServerConfig) {
        if let Some(url) = server.elasticsearch_url.as_deref() {
            match self.elasticsearch.as_mut() {
                Some(es) => es.host = url.to_string(),
                None => self.elasticsearch = Some(ElasticsearchConfig::new(url)),
            }
        }

        if let Some(dir) = server.views_dir.as_ref() {
            self.views = Some(dir.clone());
        }
    }
}
