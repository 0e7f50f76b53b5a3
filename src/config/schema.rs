//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML. Every
//! section has defaults, so an empty file yields the standard two routes
//! served on `0.0.0.0:8080`.

use serde::{Deserialize, Serialize};

use crate::routing::ViewKind;

/// Root configuration for the route service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Route declarations.
    pub routes: Vec<RouteConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Broker quote passthrough.
    pub stock_api: StockApiConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            routes: RouteConfig::standard(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            stock_api: StockApiConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// One route declaration.
///
/// ```toml
/// [[routes]]
/// name = "Trade"
/// path = "/trade/:stockCode"
/// component = "Trade"
/// props = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Unique route name.
    pub name: String,

    /// Path pattern, `:name` marks a parameter segment.
    pub path: String,

    /// View rendered on match.
    pub component: ViewKind,

    /// Forward path parameters to the view as inputs.
    #[serde(default)]
    pub props: bool,
}

impl RouteConfig {
    /// The application's route table.
    pub fn standard() -> Vec<RouteConfig> {
        vec![
            RouteConfig {
                name: "Home".to_string(),
                path: "/".to_string(),
                component: ViewKind::Home,
                props: false,
            },
            RouteConfig {
                name: "Trade".to_string(),
                path: "/trade/:stockCode".to_string(),
                component: ViewKind::Trade,
                props: true,
            },
        ]
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Broker open API used by `/api/stock/details/{stockCode}`.
///
/// ```toml
/// [stock_api]
/// enabled = true
/// app_key = "..."
/// app_secret = "..."
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StockApiConfig {
    /// Serve stock details. Off by default.
    pub enabled: bool,

    /// Broker API root, without a trailing path.
    pub base_url: String,

    pub app_key: String,

    pub app_secret: String,

    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for StockApiConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://openapivts.koreainvestment.com:29443".to_string(),
            app_key: String::new(),
            app_secret: String::new(),
            timeout_secs: 5,
        }
    }
}
