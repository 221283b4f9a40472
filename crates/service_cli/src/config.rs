//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables,
//! and command-line arguments.

use payday_core::types::PayPeriod;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::output::OutputFormat;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidOutputFormat(String),

    #[error("Invalid pay period in {source_name}: {reason}")]
    InvalidPeriod { source_name: String, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Verbosity of the stderr log stream.
///
/// Overridden per run by `RUST_LOG` when that is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// `EnvFilter` directive for this level
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaydayConfig {
    /// Pay period used when a command does not pass `--period`
    pub default_period: PayPeriod,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for PaydayConfig {
    fn default() -> Self {
        Self {
            default_period: PayPeriod::biweekly(),
            log_level: LogLevel::Info,
            output_format: OutputFormat::Table,
        }
    }
}

/// Environment variable overriding `default_period`.
pub const ENV_DEFAULT_PERIOD: &str = "PAYDAY_DEFAULT_PERIOD";
/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "PAYDAY_LOG_LEVEL";
/// Environment variable overriding `output_format`.
pub const ENV_OUTPUT_FORMAT: &str = "PAYDAY_OUTPUT_FORMAT";

impl PaydayConfig {
    /// Create a new PaydayConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Override fields from variables resolved by `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(period) = lookup(ENV_DEFAULT_PERIOD) {
            self.default_period =
                PayPeriod::from_str(&period).map_err(|e| ConfigError::InvalidPeriod {
                    source_name: ENV_DEFAULT_PERIOD.to_string(),
                    reason: e.to_string(),
                })?;
        }

        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(period) = cli.default_period {
            self.default_period = period;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        if let Some(format) = cli.output_format {
            self.output_format = format;
        }
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Default period override
    pub default_period: Option<PayPeriod>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Output format override
    pub output_format: Option<OutputFormat>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PaydayConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<PaydayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => PaydayConfig::from_file(path)?,
        None => PaydayConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli);

    Ok(config)
}
