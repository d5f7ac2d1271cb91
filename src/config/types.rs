//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::fs::default_data_file;

use super::loader;
use super::ConfigError;

/// Reimbursement rate applied when nothing else sets one (USD per mile).
pub const DEFAULT_RATE_PER_MILE: f64 = 0.70;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Where the ledger lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Data file; `~` expands to the home directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Mileage reimbursement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReimbursementConfig {
    #[serde(default = "default_rate_per_mile")]
    pub rate_per_mile: f64,
}

impl Default for ReimbursementConfig {
    fn default() -> Self {
        Self {
            rate_per_mile: default_rate_per_mile(),
        }
    }
}

fn default_rate_per_mile() -> f64 {
    DEFAULT_RATE_PER_MILE
}

/// HTTP server settings for `nannymiles serve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub reimbursement: ReimbursementConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file, discarding unknown-key warnings
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Data file to use: the configured path, or `~/.nannymiles/data.json`.
    pub fn data_file(&self) -> PathBuf {
        match &self.storage.path {
            Some(path) => loader::expand_home(path),
            None => default_data_file(),
        }
    }

    pub fn rate_per_mile(&self) -> f64 {
        self.reimbursement.rate_per_mile
    }

    /// `host:port` for the HTTP server.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Reject values no command can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.reimbursement.rate_per_mile;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::InvalidRate { value: rate });
        }
        Ok(())
    }
}
