//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by route, outcome
//! - `router_http_requests_total` (counter): API requests by endpoint, status
//! - `router_request_duration_seconds` (histogram): API latency
//!
//! Recording is a no-op until `init_metrics` installs the exporter.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one resolution attempt.
pub fn record_resolution(route: &str, matched: bool) {
    let outcome = if matched { "matched" } else { "not_found" };
    metrics::counter!(
        "router_resolutions_total",
        "route" => route.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Count one API request and its latency.
pub fn record_request(endpoint: &'static str, status: u16, start: Instant) {
    metrics::counter!(
        "router_http_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("router_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}
