//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Swap in rebuilt route tables on config reload
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use thiserror::Error;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::RouterConfig;
use crate::http::handlers;
use crate::http::request::UuidRequestId;
use crate::routing::{RouteTable, TableError};
use crate::stock::{StockApiClient, StockApiError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("stock api client: {0}")]
    StockApi(#[from] StockApiError),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Current route table; replaced wholesale on reload.
    pub table: Arc<ArcSwap<RouteTable>>,

    /// Broker client, absent when `[stock_api]` is disabled.
    pub stock_api: Option<Arc<StockApiClient>>,
}

/// HTTP front end for the route table.
pub struct HttpServer {
    router: Router,
    config: RouterConfig,
    state: AppState,
}

impl HttpServer {
    /// Build the table and broker client from `config` and assemble the router.
    pub fn new(config: RouterConfig) -> Result<Self, ServerError> {
        let table = RouteTable::from_config(&config.routes)?;
        let stock_api = if config.stock_api.enabled {
            tracing::info!(base_url = %config.stock_api.base_url, "Stock details enabled");
            Some(Arc::new(StockApiClient::new(&config.stock_api)?))
        } else {
            None
        };
        let state = AppState {
            table: Arc::new(ArcSwap::from_pointee(table)),
            stock_api,
        };
        let router = Self::build_router(&config, state.clone());
        Ok(Self {
            router,
            config,
            state,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/resolve", get(handlers::resolve))
            .route("/api/routes", get(handlers::list_routes))
            .route("/api/routes/{name}/href", get(handlers::href))
            .route("/api/stock/details/{stockCode}", get(handlers::stock_details))
            .route("/healthz", get(handlers::health))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The assembled router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared handle to the live route table.
    pub fn table(&self) -> Arc<ArcSwap<RouteTable>> {
        self.state.table.clone()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires.
    ///
    /// Configs received on `config_updates` replace the route table; a config
    /// whose routes fail to build is logged and dropped.
    pub async fn run(
        self,
        listener: TcpListener,
        config_updates: mpsc::UnboundedReceiver<RouterConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.state.table.load().len(),
            "HTTP server starting"
        );

        tokio::spawn(apply_config_updates(self.state.table.clone(), config_updates));

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn apply_config_updates(
    table: Arc<ArcSwap<RouteTable>>,
    mut config_updates: mpsc::UnboundedReceiver<RouterConfig>,
) {
    while let Some(config) = config_updates.recv().await {
        match RouteTable::from_config(&config.routes) {
            Ok(next) => {
                tracing::info!(routes = next.len(), "Route table reloaded");
                table.store(Arc::new(next));
            }
            Err(e) => {
                tracing::error!(error = %e, "Rejected reloaded routes, keeping current table");
            }
        }
    }
}
