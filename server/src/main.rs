//! GGJ Cochabamba static host
//!
//! Serves the prerendered page shell, the client bundle and image assets.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

mod config;
mod document;
mod routes;
mod state;

use config::Config;
use state::AppState;

/// GGJ Cochabamba site host
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to bind to (overrides configuration)
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Write the prerendered index.html to this directory and exit
    #[arg(long)]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ggjc_server=debug".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI args
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(addr) = args.addr {
        config.addr = addr;
    }

    let state = AppState::new(config);

    if let Some(dir) = args.export {
        let path = document::export(&dir, &state.document)
            .with_context(|| format!("exporting to {}", dir.display()))?;
        info!(path = %path.display(), "Exported prerendered document");
        return Ok(());
    }

    let addr = state.config.addr.clone();
    info!(
        addr = %addr,
        assets = %state.config.asset_dir.display(),
        bundle = %state.config.bundle_dir.display(),
        "Starting GGJ Cochabamba site"
    );

    // Build Axum router
    let app = routes::site_routes(state)
        // Add middleware
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
        )
        .layer(tower_http::compression::CompressionLayer::new());

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Server listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
