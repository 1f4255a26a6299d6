//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::format::DEFAULT_LINK_PREFIX;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "VIDLIST_CONFIG";

/// Environment variable overriding the watch-link prefix.
pub const LINK_PREFIX_ENV_VAR: &str = "VIDLIST_LINK_PREFIX";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
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
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/vidlist/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Prefix turning a video id into a watch URL.
    #[serde(default)]
    pub link_prefix: Option<String>,

    /// Subject used for share requests.
    #[serde(default)]
    pub app_name: Option<String>,

    /// Whether the list shows favorites only.
    #[serde(default)]
    pub favorites_view: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub link_prefix: String,
    pub app_name: String,
    pub favorites_view: bool,
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            app_name: "vidlist".to_string(),
            favorites_view: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/vidlist/vidlist.log` on Unix-like systems,
/// falling back to the current directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("vidlist").join("vidlist.log")
    } else {
        PathBuf::from("vidlist.log")
    }
}

/// Resolve default config file path (`~/.config/vidlist/config.toml` on Unix).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vidlist").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

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

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `VIDLIST_CONFIG` environment variable
/// 3. Default path `~/.config/vidlist/config.toml`
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        link_prefix: config.link_prefix.unwrap_or(defaults.link_prefix),
        app_name: config.app_name.unwrap_or(defaults.app_name),
        favorites_view: config.favorites_view.unwrap_or(defaults.favorites_view),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply `VIDLIST_LINK_PREFIX` if set.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(prefix) = std::env::var(LINK_PREFIX_ENV_VAR) {
        config.link_prefix = prefix;
    }

    config
}

/// Apply CLI argument overrides (highest precedence).
///
/// Only flags the user actually passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    favorites_view_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(favorites_view) = favorites_view_override {
        config.favorites_view = favorites_view;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
