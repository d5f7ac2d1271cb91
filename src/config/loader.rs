//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::infrastructure::fs::{default_config_file, nannymiles_home_dir};

use super::types::Config;
use super::ConfigError;

pub const ENV_DATA_FILE: &str = "NANNYMILES_DATA_FILE";
pub const ENV_RATE_PER_MILE: &str = "NANNYMILES_RATE_PER_MILE";
pub const ENV_HOST: &str = "NANNYMILES_HOST";
pub const ENV_PORT: &str = "NANNYMILES_PORT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Otherwise the user config file is used when
/// present, then built-in defaults. Environment overrides apply on top and
/// the result is validated.
pub fn load_or_default(
    explicit: Option<&Path>,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match default_config_file().filter(|p| p.is_file()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    let config = with_env_overrides(config)?;
    config.validate()?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (NANNYMILES_* prefix)
pub fn with_env_overrides(config: Config) -> Result<Config, ConfigError> {
    with_env_overrides_from(config, |name| std::env::var(name).ok())
}

/// Same as [`with_env_overrides`] with an injectable lookup, for tests.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(path) = get(ENV_DATA_FILE) {
        config.storage.path = Some(PathBuf::from(path));
    }

    if let Some(rate) = get(ENV_RATE_PER_MILE) {
        config.reimbursement.rate_per_mile =
            rate.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_RATE_PER_MILE,
                value: rate.clone(),
                expected: "a number",
            })?;
    }

    if let Some(host) = get(ENV_HOST) {
        config.server.host = host.trim().to_string();
    }

    if let Some(port) = get(ENV_PORT) {
        config.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            var: ENV_PORT,
            value: port.clone(),
            expected: "a port number (0-65535)",
        })?;
    }

    Ok(config)
}

/// `~/x` → `<home>/x`; anything else is returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = nannymiles_home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "path",
        "reimbursement",
        "rate_per_mile",
        "server",
        "host",
        "port",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
