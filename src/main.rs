mod config;
mod db;
mod error;
mod models;
mod routes;
mod server;
mod services;
mod state;

use crate::config::Config;
use crate::error::AppResult;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// shortly - A minimal URL shortener
#[derive(Parser, Debug)]
#[command(name = "shortly")]
#[command(version = "0.1.0")]
#[command(about = "A minimal URL shortener", long_about = None)]
struct Cli {
    /// Host to bind to (overrides HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides PORT env var)
    #[arg(long)]
    port: Option<u16>,

    /// Run migrations on startup
    #[arg(long, default_value_t = true)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing; DEBUG env var picks the fallback level when
    // RUST_LOG is unset
    let fallback = if config.server.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(fallback.to_string())),
        )
        .init();

    // Override config with CLI args if provided
    let host = cli.host.clone().unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    // Re-compute base_url after CLI overrides
    let mut config = config;
    if cli.host.is_some() || cli.port.is_some() {
        config.url.base_url = format!("http://{}:{}", host, port);
    }

    server::run_server(config, addr, cli.migrate).await
}
