//! Bootstrap configuration loading
//!
//! Each service resolves its bootstrap settings in priority order:
//! 1. Command-line argument / environment variable (highest priority, via clap)
//! 2. TOML config file
//! 3. OS-dependent compiled default (fallback)
//!
//! A missing TOML file is not an error; the service starts on defaults.
//! A TOML file that exists but cannot be parsed is.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Compiled defaults for one service
#[derive(Debug, Clone)]
pub struct ServiceDefaults {
    /// Short service name, used for config and database file names
    pub service: &'static str,
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_level: String,
}

impl ServiceDefaults {
    /// Defaults for `service`, listening on `port`
    pub fn new(service: &'static str, port: u16) -> Self {
        Self {
            service,
            host: "127.0.0.1".to_string(),
            port,
            database_path: default_data_dir().join(format!("{}.db", service)),
            log_level: "info".to_string(),
        }
    }

    /// Default TOML location: `<config_dir>/fsnd/<service>.toml`
    pub fn config_file_path(&self) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fsnd").join(format!("{}.toml", self.service)))
    }
}

/// Contents of the optional TOML bootstrap file
///
/// Every field is optional; absent fields fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging section of the TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
}

/// Fully resolved bootstrap configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_level: String,
}

impl ServiceConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load a TOML config file
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_toml_config(path: &Path) -> Result<Option<TomlConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(Some(config))
}

/// Resolve the bootstrap configuration for a service
pub fn resolve_config(overrides: CliOverrides, defaults: ServiceDefaults) -> Result<ServiceConfig> {
    let config_path = overrides
        .config_file
        .clone()
        .or_else(|| defaults.config_file_path());

    let toml = match config_path {
        Some(path) => match load_toml_config(&path)? {
            Some(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            None => {
                // An explicitly requested file that is missing deserves a warning
                if overrides.config_file.is_some() {
                    warn!("Config file {} not found, using defaults", path.display());
                }
                TomlConfig::default()
            }
        },
        None => TomlConfig::default(),
    };

    Ok(merge(overrides, toml, defaults))
}

/// Apply the priority order to already-loaded sources
pub fn merge(overrides: CliOverrides, toml: TomlConfig, defaults: ServiceDefaults) -> ServiceConfig {
    ServiceConfig {
        host: overrides.host.or(toml.host).unwrap_or(defaults.host),
        port: overrides.port.or(toml.port).unwrap_or(defaults.port),
        database_path: overrides
            .database_path
            .or(toml.database_path)
            .unwrap_or(defaults.database_path),
        log_level: toml.logging.level.unwrap_or(defaults.log_level),
    }
}

/// Get OS-dependent default data folder
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fsnd"))
        .unwrap_or_else(|| PathBuf::from("./fsnd_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ServiceDefaults {
        ServiceDefaults {
            service: "trivia",
            host: "127.0.0.1".to_string(),
            port: 5001,
            database_path: PathBuf::from("/tmp/trivia.db"),
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_merge_uses_defaults_when_nothing_set() {
        let config = merge(CliOverrides::default(), TomlConfig::default(), defaults());
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5001);
        assert_eq!(config.database_path, PathBuf::from("/tmp/trivia.db"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.bind_address(), "127.0.0.1:5001");
    }

    #[test]
    fn test_merge_toml_overrides_defaults() {
        let toml = TomlConfig {
            port: Some(8080),
            database_path: Some(PathBuf::from("/srv/trivia.db")),
            logging: LoggingConfig {
                level: Some("debug".to_string()),
            },
            ..Default::default()
        };
        let config = merge(CliOverrides::default(), toml, defaults());
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, PathBuf::from("/srv/trivia.db"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_merge_cli_beats_toml() {
        let toml = TomlConfig {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
            ..Default::default()
        };
        let overrides = CliOverrides {
            port: Some(9090),
            ..Default::default()
        };
        let config = merge(overrides, toml, defaults());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_default_database_named_after_service() {
        let defaults = ServiceDefaults::new("fyyur", 5000);
        assert!(defaults.database_path.ends_with("fyyur.db"));
        assert_eq!(defaults.port, 5000);
    }
}
