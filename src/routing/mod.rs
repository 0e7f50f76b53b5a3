//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation path ("/trade/005930?tab=book")
//!     → table.rs (strip query/fragment, match pattern)
//!     → params.rs (bindings → typed view inputs)
//!     → Return: Resolution { route, bindings, params } or NotFound
//!
//! Table Compilation (at startup / on reload):
//!     RouteConfig[]
//!     → pattern.rs (parse ":name" segments)
//!     → table.rs (unique names, no ambiguous patterns, view inputs bound)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tables are compiled once and never mutated; reload builds a new one
//! - Deterministic: same path always resolves to the same route
//! - View inputs are typed records, not loose maps

pub mod error;
pub mod navigator;
pub mod params;
pub mod pattern;
pub mod route;
pub mod table;
pub mod view;

pub use error::{RouteError, TableError};
pub use navigator::Navigator;
pub use params::{FromPathParams, PathParams, RouteParams, TradeParams};
pub use pattern::{FillError, PathPattern, PatternError, Segment};
pub use route::{Route, RouteId};
pub use table::{Location, Resolution, RouteTable, RouteTableBuilder};
pub use view::{Home, Trade, View, ViewKind};
