//! Configuration management for the `FuelRank` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::FuelRankError;
use crate::models::{FuelType, SortMode};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `FuelRank` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuelRankConfig {
    /// Remote price table configuration
    #[serde(default)]
    pub source: SourceConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP API configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Default ranking selections
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Remote price table settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Project URL of the hosted table, e.g. `https://xyz.supabase.co`
    #[serde(default)]
    pub base_url: String,
    /// Public (anon) API key
    pub api_key: Option<String>,
    /// Table holding one row per station
    #[serde(default = "default_source_table")]
    pub table: String,
    /// Request timeout in seconds
    #[serde(default = "default_source_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_source_max_retries")]
    pub max_retries: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// HTTP API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Selections used when the caller does not pick one
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub fuel_type: FuelType,
    #[serde(default)]
    pub sort_mode: SortMode,
}

// Default value functions
fn default_source_table() -> String {
    "gas_prices".to_string()
}

fn default_source_timeout() -> u32 {
    30
}

fn default_source_max_retries() -> u32 {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_server_port() -> u16 {
    3000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            table: default_source_table(),
            timeout_seconds: default_source_timeout(),
            max_retries: default_source_max_retries(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl FuelRankConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // FUELRANK_SOURCE__API_KEY -> source.api_key
        builder = builder.add_source(
            Environment::with_prefix("FUELRANK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: FuelRankConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fuelrank").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.source.table.is_empty() {
            self.source.table = default_source_table();
        }
        if self.source.timeout_seconds == 0 {
            self.source.timeout_seconds = default_source_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.source.api_key {
            if api_key.trim().is_empty() {
                return Err(FuelRankError::config(
                    "Station table API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.source.timeout_seconds > 300 {
            return Err(
                FuelRankError::config("Station table timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.source.max_retries > 10 {
            return Err(
                FuelRankError::config("Station table max retries cannot exceed 10").into(),
            );
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(FuelRankError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(FuelRankError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        // An empty URL is allowed until something actually fetches from the table
        let base_url = &self.source.base_url;
        if !base_url.is_empty()
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            return Err(FuelRankError::config(
                "Station table base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}
