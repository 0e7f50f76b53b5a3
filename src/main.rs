//! trade-router service.
//!
//! Serves the application's route table over HTTP so that out-of-process
//! collaborators can resolve navigation paths to views.
//!
//! ```text
//!  navigation path ──▶ GET /api/resolve ──▶ RouteTable ──▶ { route, view, params }
//!                                              ▲
//!  routes.toml ──▶ loader ──▶ validation ──────┘ (rebuilt and swapped on change)
//! ```

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "trade-router")]
#[command(about = "Route table service for the trading web client", long_about = None)]
struct Args {
    /// TOML configuration file. Without one the standard routes are served.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    trade_router::lifecycle::startup::run(args.config.as_deref()).await?;
    Ok(())
}
