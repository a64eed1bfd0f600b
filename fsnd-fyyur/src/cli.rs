//! Command-line arguments for fsnd-fyyur

use std::path::PathBuf;

use clap::Parser;
use fsnd_common::config::{CliOverrides, ServiceDefaults};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Command-line arguments for fsnd-fyyur
#[derive(Parser, Debug)]
#[command(name = "fsnd-fyyur")]
#[command(about = "Venue, artist and show listing site")]
#[command(version)]
pub struct Args {
    /// TOML config file (defaults to <config dir>/fsnd/fyyur.toml)
    #[arg(short, long, env = "FSND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "FSND_FYYUR_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FSND_FYYUR_PORT")]
    pub port: Option<u16>,

    /// SQLite database file
    #[arg(short, long, env = "FSND_FYYUR_DATABASE")]
    pub database: Option<PathBuf>,
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
    ServiceDefaults::new("fyyur", DEFAULT_PORT)
}
