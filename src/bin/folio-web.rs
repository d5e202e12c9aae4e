//! Folio preview server binary
//!
//! Serves the portfolio page over HTTP with the theme toggle, carousel and
//! contact form wired to the server.
//!
//! # Usage
//!
//! ```bash
//! # Start with the configured host and port (127.0.0.1:3030 by default)
//! folio-web
//!
//! # Serve images from a local directory on another port
//! folio-web --port 8080 --assets ./public
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::config::Config;
use folio::web;

/// Folio preview server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (defaults to `web.port` from the config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (defaults to `web.host` from the config)
    #[arg(long)]
    host: Option<String>,

    /// Directory with images and documents, served for unknown paths
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Using default configuration: {e:#}");
        Config::default()
    });
    if let Some(dir) = args.assets {
        config.content.asset_dir = Some(dir);
    }
    config.validate()?;

    let host = args.host.unwrap_or_else(|| config.web.host.clone());
    let port = args.port.unwrap_or(config.web.port);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    if let Some(dir) = &config.content.asset_dir {
        info!("Serving assets from {}", dir.display());
    }

    web::run_server(config, addr).await
}
