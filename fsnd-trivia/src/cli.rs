//! Command-line arguments for fsnd-trivia

use std::path::PathBuf;

use clap::Parser;
use fsnd_common::config::{CliOverrides, ServiceDefaults};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5001;

/// Command-line arguments for fsnd-trivia
#[derive(Parser, Debug)]
#[command(name = "fsnd-trivia")]
#[command(about = "Trivia question JSON API")]
#[command(version)]
pub struct Args {
    /// TOML config file (defaults to <config dir>/fsnd/trivia.toml)
    #[arg(short, long, env = "FSND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "FSND_TRIVIA_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FSND_TRIVIA_PORT")]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(short, long, env = "FSND_TRIVIA_DATABASE")]
    pub database: Option<PathBuf>,

    /// Insert the default categories when the table is empty
    #[arg(long)]
    pub seed: bool,
}

impl Args {
    /// Overrides for the bootstrap config resolution
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            host: self.host.clone(),
            port: self.port,
            database_path: self.database.clone(),
        }
    }
}

/// Compiled defaults for this service
pub fn defaults() -> ServiceDefaults {
    ServiceDefaults::new("trivia", DEFAULT_PORT)
}
