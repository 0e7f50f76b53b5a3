//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout log stream
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, route, request id) on every event
//! - Request ID flows from the HTTP layer into handler logs
//! - Metrics are cheap and disabled unless configured

pub mod logging;
pub mod metrics;
