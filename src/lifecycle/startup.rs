//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Build the route table, broker client and HTTP server
//! - Start the config watcher and signal listener
//! - Bind the listener last and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Without a config file the standard routes are served and nothing is watched

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::config::{load_config, ConfigError, ConfigWatcher, RouterConfig};
use crate::http::{HttpServer, ServerError};
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::shutdown_on_ctrl_c;
use crate::observability::{logging, metrics};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("server: {0}")]
    Server(#[from] ServerError),

    #[error("watch: {0}")]
    Watch(#[from] notify::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the service until Ctrl+C.
pub async fn run(config_path: Option<&Path>) -> Result<(), StartupError> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "trade-router starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_ctrl_c(shutdown.clone()));

    // Keep the watcher alive for the lifetime of the server.
    let (_watcher, config_updates) = match config_path {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        None => {
            let (_tx, updates) = mpsc::unbounded_channel();
            (None, updates)
        }
    };

    let listener = TcpListener::bind(&bind_address).await?;
    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
