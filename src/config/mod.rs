//! Configuration module for nannymiles
//!
//! Precedence, highest first:
//! 1. CLI flags (`--data-file`, `--rate`, `serve --host/--port`)
//! 2. Environment variables (NANNYMILES_*)
//! 3. Config file (`--config`, or `~/.config/nannymiles/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

use std::path::PathBuf;

use thiserror::Error;

pub use loader::{
    expand_home, load_or_default, load_with_warnings, with_env_overrides,
    with_env_overrides_from, ConfigWarning, ENV_DATA_FILE, ENV_HOST, ENV_PORT, ENV_RATE_PER_MILE,
};
pub use types::{
    Config, ReimbursementConfig, ServerConfig, StorageConfig, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_RATE_PER_MILE,
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("invalid config file {path}\n  → Details: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid value '{value}' for {var}: expected {expected}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("rate per mile must be a positive number, got {value}")]
    InvalidRate { value: f64 },
}
