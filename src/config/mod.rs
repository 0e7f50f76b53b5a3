//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, trial table build)
//!     → RouterConfig (validated, immutable)
//!     → RouteTable::from_config
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → server swaps in a freshly built RouteTable
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; an empty file serves the standard routes
//! - Validation separates syntactic (serde) from semantic checks
//! - An invalid reload is logged and ignored

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    ListenerConfig, ObservabilityConfig, RouteConfig, RouterConfig, StockApiConfig, TimeoutConfig,
};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
