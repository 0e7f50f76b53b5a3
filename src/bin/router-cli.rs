use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::Value;

use trade_router::config::{load_config, RouterConfig};
use trade_router::http::response::RouteSummary;
use trade_router::routing::RouteTable;

#[derive(Parser)]
#[command(name = "router-cli")]
#[command(about = "Inspect and query the trading client's route table", long_about = None)]
struct Cli {
    /// Route config file (TOML). Defaults to the standard routes.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Query a running trade-router service instead of a local table.
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a navigation path
    Resolve { path: String },
    /// List declared routes
    Routes,
    /// Validate the config file
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(url) = &cli.url {
        return remote(url, &cli.command).await;
    }

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => RouterConfig::default(),
    };
    let table = RouteTable::from_config(&config.routes)?;

    match cli.command {
        Commands::Resolve { path } => match table.resolve(&path) {
            Ok(resolution) => {
                let location = resolution.to_location(&path);
                println!("{}", serde_json::to_string_pretty(&location)?);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Routes => {
            let routes: Vec<RouteSummary> = table.routes().map(RouteSummary::from).collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Check => {
            println!("OK: {} routes", table.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn remote(url: &str, command: &Commands) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let request = match command {
        Commands::Resolve { path } => client
            .get(format!("{}/api/resolve", url))
            .query(&[("path", path)]),
        Commands::Routes => client.get(format!("{}/api/routes", url)),
        Commands::Check => {
            eprintln!("Error: check only works on a local config file");
            return Ok(ExitCode::FAILURE);
        }
    };

    let res = request.send().await?;
    let status = res.status();
    let json: Value = res.json().await?;
    if status.is_success() {
        println!("{}", serde_json::to_string_pretty(&json)?);
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Error: service returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&json)?);
        Ok(ExitCode::FAILURE)
    }
}
