//! OS signal handling.
//!
//! SIGINT (Ctrl+C) triggers graceful shutdown. Config reload is driven by
//! the file watcher rather than SIGHUP.

use crate::lifecycle::shutdown::Shutdown;

/// Wait for Ctrl+C, then trigger `shutdown`.
pub async fn shutdown_on_ctrl_c(shutdown: Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C, shutting down");
    }
    shutdown.trigger();
}
