//! passboard-server - recruitment pass dashboard API
//!
//! Serves pass listings, dashboard aggregates and pipeline mutations over an
//! in-memory seeded store, plus the built dashboard assets.

use anyhow::{Context, Result};
use clap::Parser;
use passboard_common::config::{ServerConfig, TomlConfig};
use passboard_common::PassStore;
use passboard_server::cli::Args;
use passboard_server::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config_path();
    let file = TomlConfig::load_or_default(config_path.as_deref())
        .context("Failed to load config file")?;
    let config = ServerConfig::resolve(args.overrides(), file);

    // Initialize tracing
    let level = &config.log_level;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("passboard_server={level},passboard_common={level},tower_http={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting passboard-server v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => info!("No config file at {}, using defaults", path.display()),
        None => info!("No config directory on this platform, using defaults"),
    }

    let store = PassStore::seeded();
    info!("Seeded {} recruitment passes", store.len());
    info!("Static assets: {}", config.static_dir.display());

    let state = AppState::new(store, config.static_dir.clone());
    let app = build_router(state);

    let addr = config.socket_addr().context("Invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("passboard-server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
