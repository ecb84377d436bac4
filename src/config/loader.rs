//! Configuration file loading with precedence handling.

use crate::model::{Category, ListStyle};
use crate::source::http::SourceConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "RUV_CONFIG";
/// Environment override for the API endpoint.
pub const BASE_URL_ENV: &str = "RUV_BASE_URL";
/// Environment override for the page seed.
pub const SEED_ENV: &str = "RUV_SEED";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Config file parses but a value is out of range.
    #[error("Invalid value for {key} in {path}: {reason}")]
    InvalidValue {
        /// Path with the bad value.
        path: PathBuf,
        /// Offending key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/ruv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// API endpoint.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Records per page.
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Fixed seed for stable pages.
    #[serde(default)]
    pub seed: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Filter tab selected on startup (`all`, `male`, `female`).
    #[serde(default)]
    pub default_filter: Option<Category>,

    /// Layout on startup (`single`, `double`).
    #[serde(default)]
    pub default_style: Option<ListStyle>,

    /// Rows from the end at which scrolling requests the next page.
    #[serde(default)]
    pub load_more_threshold: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Reject values that parse but would make every fetch fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad key.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |key: &'static str, reason: &str| ConfigError::InvalidValue {
            path: path.to_path_buf(),
            key,
            reason: reason.to_string(),
        };

        if self.page_size == Some(0) {
            return Err(invalid("page_size", "must be at least 1"));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(invalid("request_timeout_secs", "must be at least 1"));
        }
        Ok(())
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// API endpoint.
    pub base_url: String,
    /// Records per page.
    pub page_size: u32,
    /// Fixed seed for stable pages.
    pub seed: Option<String>,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Filter tab selected on startup.
    pub default_filter: Category,
    /// Layout on startup.
    pub default_style: ListStyle,
    /// Rows from the end at which scrolling requests the next page.
    pub load_more_threshold: usize,
    /// Log file destination.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let source = SourceConfig::default();
        Self {
            base_url: source.base_url,
            page_size: source.page_size,
            seed: source.seed,
            request_timeout: source.timeout,
            default_filter: Category::All,
            default_style: ListStyle::Single,
            load_more_threshold: 1,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Connection settings for the HTTP source.
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig {
            base_url: self.base_url.clone(),
            page_size: self.page_size,
            seed: self.seed.clone(),
            timeout: self.request_timeout,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/ruv/ruv.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("ruv").join("ruv.log"),
        None => PathBuf::from("ruv.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors, or holds an
/// out-of-range value.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    config.validate(&path)?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/ruv/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ruv").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `RUV_CONFIG` environment variable
/// 3. Default path `~/.config/ruv/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed,
/// or `RUV_CONFIG` is not valid unicode.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match std::env::var(CONFIG_ENV) {
        Ok(env_path) if !env_path.is_empty() => return load_config_file(PathBuf::from(env_path)),
        Ok(_) | Err(std::env::VarError::NotPresent) => {}
        Err(std::env::VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidPath(raw.to_string_lossy().into_owned()));
        }
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        base_url: config.base_url.unwrap_or(defaults.base_url),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        seed: config.seed.or(defaults.seed),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        default_filter: config.default_filter.unwrap_or(defaults.default_filter),
        default_style: config.default_style.unwrap_or(defaults.default_style),
        load_more_threshold: config
            .load_more_threshold
            .unwrap_or(defaults.load_more_threshold),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `RUV_BASE_URL`: Override the API endpoint
/// - `RUV_SEED`: Override the page seed
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        config.base_url = base_url;
    }
    if let Ok(seed) = std::env::var(SEED_ENV) {
        config.seed = Some(seed);
    }

    config
}

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--filter`.
    pub filter: Option<Category>,
    /// `--style`.
    pub style: Option<ListStyle>,
    /// `--seed`.
    pub seed: Option<String>,
    /// `--page-size`.
    pub page_size: Option<u32>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(filter) = cli.filter {
        config.default_filter = filter;
    }
    if let Some(style) = cli.style {
        config.default_style = style;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
