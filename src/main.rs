//! Cabinet - an AI advisory team for your business
//!
//! CLI entry point.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod settings;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cabinet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cabinet v{}", env!("CARGO_PKG_VERSION"));

    if !std::path::Path::new(".env").exists() {
        warn!(".env file not found; set ANTHROPIC_API_KEY in the environment");
    }

    let cli = cli::Cli::parse();
    cli::run(cli).await
}
