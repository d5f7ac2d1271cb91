//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the system API rather than environment
//! variables, so setting `HOME` in tests has no effect there. Everything that
//! derives a default path from the home directory goes through
//! `nannymiles_home_dir()`, which checks `NANNYMILES_TEST_HOME` first.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const NANNYMILES_TEST_HOME_VAR: &str = "NANNYMILES_TEST_HOME";

/// Home directory used for default data and config paths.
pub fn nannymiles_home_dir() -> Option<PathBuf> {
    std::env::var(NANNYMILES_TEST_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// `~/.nannymiles/data.json`
pub fn default_data_file() -> PathBuf {
    nannymiles_home_dir()
        .map(|h| h.join(".nannymiles/data.json"))
        .unwrap_or_else(|| PathBuf::from(".nannymiles/data.json"))
}

/// `$XDG_CONFIG_HOME/nannymiles/config.toml`, falling back to `~/.config`.
pub fn default_config_file() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| nannymiles_home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("nannymiles/config.toml"))
}
