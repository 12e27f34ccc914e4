//! Pharmabot - medicine price and stock assistant
//!
//! Serves the chat endpoint backed by the product sheet.

use anyhow::Result;
use clap::Parser;
use pharmabot::catalog;
use pharmabot::config::Config;
use pharmabot::core::{LookupPolicy, LookupService};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides config
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides config
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging before reading config so load problems are visible.
    // RUST_LOG wins, then --verbose, then the config's log_level.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let level_pinned = env_filter.is_some() || args.verbose;
    let initial = env_filter
        .unwrap_or_else(|| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    let (filter, filter_handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    // An explicit --config must parse; the default location degrades to defaults
    let loaded = match &args.config {
        Some(path) => Config::load_strict(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {:#}", e);
            return Err(e);
        }
    };
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    if !level_pinned {
        filter_handle.reload(EnvFilter::new(&config.log_level))?;
    }

    info!("💊 Pharmabot v{} starting...", env!("CARGO_PKG_VERSION"));

    let policy = LookupPolicy::from_config(&config)?;
    let provider = catalog::get_provider(&config)?;
    info!("📦 Catalog provider: {}", provider.name());

    let service = LookupService::new(provider, policy);
    pharmabot::server::serve(&config, service).await
}
