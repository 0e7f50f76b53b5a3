//! Route table for the stock-trading web client.
//!
//! `/` shows the `Home` view; `/trade/:stockCode` shows the `Trade` view
//! with the stock code as its typed input. The HTTP service also answers
//! the Trade view's price lookups through the broker API.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod stock;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Navigator, RouteError, RouteTable};
