//! Gamestash: multimedia asset and player score backend
//!
//! Starts the HTTP server; there is no other CLI surface.

use anyhow::{Context, Result};
use clap::Parser;
use gamestash::config::{Config, LogFormat};
use gamestash::http::HttpServer;
use gamestash::store::MediaStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gamestash")]
#[command(about = "Multimedia asset and player score backend")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Listen address override (e.g. "0.0.0.0:8000")
    #[arg(short, long)]
    listen: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };
    config.database.apply_env_override();
    if let Some(listen) = cli.listen {
        config.http.listen_addr = listen;
    }
    config.validate()?;

    init_tracing(&config, cli.verbose);

    info!(
        database = %config.database.name,
        "starting gamestash {}",
        env!("CARGO_PKG_VERSION")
    );

    let store = MediaStore::connect(&config.database)
        .await
        .context("Failed to configure MongoDB client")?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received ctrl-c, shutting down");
            let _ = shutdown_tx.send(());
        }
    });

    let server = HttpServer::new(config.http, config.limits, Arc::new(store));
    server.run(shutdown_rx).await
}

fn init_tracing(config: &Config, verbose: u8) {
    let directive = config.logging.level_directive(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    match config.logging.format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
    }
}
