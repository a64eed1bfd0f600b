//! fsnd-fyyur - venue, artist and show listing site
//!
//! Resolves bootstrap config, opens the SQLite database, creates the schema
//! and serves HTML pages until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use fsnd_common::config::resolve_config;
use fsnd_common::db::connect_database;
use fsnd_common::shutdown::shutdown_signal;
use fsnd_fyyur::cli::{defaults, Args};
use fsnd_fyyur::{build_router, db, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(args.overrides(), defaults())
        .context("Failed to resolve configuration")?;

    fsnd_common::logging::init("fsnd_fyyur", &config.log_level);

    info!(
        "Starting fsnd-fyyur v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Database path: {}", config.database_path.display());

    let pool = connect_database(&config.database_path)
        .await
        .context("Failed to open database")?;
    db::create_schema(&pool)
        .await
        .context("Failed to create schema")?;

    let app = build_router(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address()))?;
    info!("fsnd-fyyur listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
