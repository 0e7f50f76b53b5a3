//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check every route path parses and names are unique
//! - Detect ambiguous routes by compiling a trial table
//! - Require a usable broker URL and credentials when stock details are on
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{RouterConfig, StockApiConfig};
use crate::routing::{PathPattern, PatternError, RouteTable, TableError};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is not a valid socket address: '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),

    #[error("no routes declared")]
    NoRoutes,

    #[error("route #{0} has an empty name")]
    EmptyRouteName(usize),

    #[error("route '{route}' has an invalid path: {source}")]
    InvalidPath {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("route name '{0}' is declared more than once")]
    DuplicateRouteName(String),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("stock_api.base_url must be an http(s) URL: '{0}'")]
    InvalidStockApiUrl(String),

    #[error("stock_api.{0} is required when stock_api is enabled")]
    MissingCredential(&'static str),

    #[error("stock_api.timeout_secs must be greater than zero")]
    ZeroStockApiTimeout,
}

/// Check a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let route_errors_before = errors.len();
    let mut names = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyRouteName(index));
        } else if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRouteName(route.name.clone()));
        }

        if let Err(source) = PathPattern::parse(&route.path) {
            errors.push(ValidationError::InvalidPath {
                route: route.name.clone(),
                source,
            });
        }
    }

    // Per-route checks passed; remaining problems are cross-route.
    if errors.len() == route_errors_before && !config.routes.is_empty() {
        if let Err(e) = RouteTable::from_config(&config.routes) {
            errors.push(e.into());
        }
    }

    if config.stock_api.enabled {
        validate_stock_api(&config.stock_api, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_stock_api(stock_api: &StockApiConfig, errors: &mut Vec<ValidationError>) {
    let url_ok = reqwest::Url::parse(&stock_api.base_url)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !url_ok {
        errors.push(ValidationError::InvalidStockApiUrl(stock_api.base_url.clone()));
    }
    if stock_api.app_key.is_empty() {
        errors.push(ValidationError::MissingCredential("app_key"));
    }
    if stock_api.app_secret.is_empty() {
        errors.push(ValidationError::MissingCredential("app_secret"));
    }
    if stock_api.timeout_secs == 0 {
        errors.push(ValidationError::ZeroStockApiTimeout);
    }
}
