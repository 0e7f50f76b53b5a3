//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use trade_router::config::RouterConfig;
use trade_router::http::HttpServer;
use trade_router::lifecycle::Shutdown;

/// A server running on an ephemeral port.
#[allow(dead_code)]
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub config_tx: mpsc::UnboundedSender<RouterConfig>,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

/// Start a server with `config` bound to 127.0.0.1:0.
#[allow(dead_code)]
pub async fn start_server(config: RouterConfig) -> RunningServer {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let (config_tx, config_updates) = mpsc::unbounded_channel();
    let server_shutdown = shutdown.subscribe();
    let handle = tokio::spawn(async move {
        server.run(listener, config_updates, server_shutdown).await
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    RunningServer {
        addr,
        shutdown,
        config_tx,
        handle,
    }
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
