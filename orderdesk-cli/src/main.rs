//! orderdesk CLI - start the inventory and ordering HTTP API
//!
//! Reads database settings from the environment (a .env file is honored),
//! connects to PostgreSQL, runs the idempotent schema migrations, and
//! serves until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use orderdesk_server::db::migrations;
use orderdesk_server::{create_pool, run_server, DatabaseConfig, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "orderdesk",
    version,
    about = "Inventory and ordering HTTP API backed by PostgreSQL"
)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing with console output
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let db_config = DatabaseConfig::from_env().context("database configuration")?;
    let pool = create_pool(&db_config)
        .await
        .context("could not connect to PostgreSQL")?;
    tracing::info!(
        host = %db_config.host,
        database = %db_config.database,
        "Connected to PostgreSQL"
    );

    migrations::run(&pool)
        .await
        .context("schema migrations failed")?;

    let config = ServerConfig {
        bind_addr: cli.bind,
    };
    run_server(pool, config).await?;

    Ok(())
}
