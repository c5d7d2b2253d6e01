//! Configuration file loading with precedence handling.
//!
//! Precedence: hardcoded defaults, then the TOML config file, then
//! `DARC_*` environment variables, then CLI flags.

use crate::model::{TriggerType, UserRole};
use crate::state::AuditFilters;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
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
/// All fields are optional - if not specified, hardcoded defaults are
/// used. Corresponds to `~/.config/darc/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default role when the CLI does not pass one.
    #[serde(default)]
    pub role: Option<UserRole>,

    /// Default rows per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Default claim-date range start.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Default claim-date range end.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Default trigger-type filter.
    #[serde(default)]
    pub trigger: Option<TriggerType>,

    /// Whether the sidebar starts expanded.
    #[serde(default)]
    pub sidebar_expanded: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Custom key bindings (future use).
    #[serde(default)]
    pub keybindings: Option<toml::Value>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Role of the signed-in user.
    pub role: UserRole,
    /// Rows per page.
    pub page_size: usize,
    /// Committed audit filters at startup.
    pub filters: AuditFilters,
    /// Whether the sidebar starts expanded.
    pub sidebar_expanded: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            role: UserRole::DeskAuditor,
            page_size: 10,
            filters: AuditFilters::default(),
            sidebar_expanded: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/darc/darc.log` on Unix-like systems, the platform
/// equivalent elsewhere. Falls back to the current directory when no
/// state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("darc").join("darc.log")
    } else {
        PathBuf::from("darc.log")
    }
}

/// Resolve the default config file path, `~/.config/darc/config.toml`.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("darc").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use
/// defaults). Returns `Err` if the file exists but cannot be read or
/// parsed.
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

    Ok(Some(config))
}

/// Load the config file from the explicit CLI path or the default
/// location.
pub fn load_config_with_precedence(
    cli_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    match cli_path.or_else(default_config_path) {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Merge an optional config file over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();
    let Some(file) = file else {
        return resolved;
    };
    if let Some(role) = file.role {
        resolved.role = role;
    }
    if let Some(page_size) = file.page_size {
        resolved.page_size = page_size.max(1);
    }
    if let Some(start_date) = file.start_date {
        resolved.filters.start_date = start_date;
    }
    if let Some(end_date) = file.end_date {
        resolved.filters.end_date = end_date;
    }
    if let Some(trigger) = file.trigger {
        resolved.filters.trigger = trigger;
    }
    if let Some(sidebar) = file.sidebar_expanded {
        resolved.sidebar_expanded = sidebar;
    }
    if let Some(log_file_path) = file.log_file_path {
        resolved.log_file_path = log_file_path;
    }
    resolved
}

/// Apply `DARC_ROLE`, `DARC_PAGE_SIZE` and `DARC_LOG_FILE` overrides.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(role) = std::env::var("DARC_ROLE") {
        if let Some(role) = UserRole::parse(&role) {
            config.role = role;
        }
    }
    if let Ok(page_size) = std::env::var("DARC_PAGE_SIZE") {
        if let Ok(page_size) = page_size.parse::<usize>() {
            config.page_size = page_size.max(1);
        }
    }
    if let Ok(log_file) = std::env::var("DARC_LOG_FILE") {
        config.log_file_path = PathBuf::from(log_file);
    }
    config
}

/// CLI values that override everything else. `None` fields leave the
/// resolved value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--role`.
    pub role: Option<UserRole>,
    /// `--page-size`.
    pub page_size: Option<usize>,
    /// `--start-date`.
    pub start_date: Option<NaiveDate>,
    /// `--end-date`.
    pub end_date: Option<NaiveDate>,
    /// `--trigger`.
    pub trigger: Option<TriggerType>,
}

/// Apply CLI argument overrides, the last step of the chain.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(role) = cli.role {
        config.role = role;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size.max(1);
    }
    if let Some(start_date) = cli.start_date {
        config.filters.start_date = start_date;
    }
    if let Some(end_date) = cli.end_date {
        config.filters.end_date = end_date;
    }
    if let Some(trigger) = cli.trigger {
        config.filters.trigger = trigger;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
