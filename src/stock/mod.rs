//! Stock quote passthrough to the broker's open API.
//!
//! # Data Flow
//! ```text
//! GET /api/stock/details/{stockCode}
//!     → client.rs (cached access token, inquire-price call)
//!     → types.rs (broker wire format → StockDetails)
//!     → JSON { code, price }
//! ```
//!
//! # Design Decisions
//! - Disabled unless `[stock_api]` is enabled with credentials
//! - One access token is shared by all requests and renewed a minute before expiry
//! - A broker-side rejection or an empty price is "no such stock", not an error

mod client;
mod types;

pub use client::{StockApiClient, StockApiError};
pub use types::StockDetails;
