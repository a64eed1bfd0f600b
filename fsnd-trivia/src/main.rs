//! fsnd-trivia - trivia question JSON API
//!
//! Resolves bootstrap config, opens the SQLite database, creates the schema
//! and serves the API until Ctrl+C / SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use fsnd_common::config::resolve_config;
use fsnd_common::db::connect_database;
use fsnd_common::shutdown::shutdown_signal;
use fsnd_trivia::cli::{defaults, Args};
use fsnd_trivia::{build_router, db, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(args.overrides(), defaults())
        .context("Failed to resolve configuration")?;

    fsnd_common::logging::init("fsnd_trivia", &config.log_level);

    info!(
        "Starting fsnd-trivia v{} [{}] built {} ({})",
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

    if args.seed {
        let inserted = db::seed_categories(&pool)
            .await
            .context("Failed to seed categories")?;
        if inserted == 0 {
            info!("Categories already present, nothing seeded");
        }
    }

    let app = build_router(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address()))?;
    info!("fsnd-trivia listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}
