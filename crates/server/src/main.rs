//! Fundation search server
//!
//! Serves the search plugin on its own, backed by Elasticsearch.

use clap::Parser;
use fundation_search_rest::{
    HostConfig, SearchPlugin, ServerConfig, create_app_with_config, init_logging,
};
use tracing::info;

/// Loads the host configuration and applies command line overrides.
fn load_host_config(config: &ServerConfig) -> anyhow::Result<HostConfig> {
    let mut host_config = if config.config.exists() {
        info!(path = %config.config.display(), "Loading host configuration");
        HostConfig::load(&config.config)?
    } else {
        info!(
            path = %config.config.display(),
            "Host configuration not found, using defaults"
        );
        HostConfig::default()
    };

    host_config.apply_overrides(config);
    Ok(host_config)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let host_config = load_host_config(&config)?;

    let plugin = SearchPlugin::from_config(&host_config)
        .map_err(|e| anyhow::anyhow!("Cannot start search plugin: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        mount_path = %plugin.config().mount_path,
        "Starting Fundation search server"
    );

    let app = create_app_with_config(&plugin, &config);
    serve(app, &config).await
}
