//! Configuration management
//!
//! This module handles loading, validation, and merging of configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Access-control configuration
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables, reading `.env` first
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        dotenv_outcome(dotenvy::dotenv())?;

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("TEAMHUB_SYSTEM_ADMIN_OVERRIDE") {
            config.access.system_admin_override = parse_bool("TEAMHUB_SYSTEM_ADMIN_OVERRIDE", &value)?;
        }
        if let Some(value) = lookup("TEAMHUB_SYSTEM_ADMIN_ROLES") {
            config.access.system_admin_roles = value
                .split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(value) = lookup("TEAMHUB_RETAIN_ROLE_ON_FETCH_ERROR") {
            config.access.retain_role_on_fetch_error =
                parse_bool("TEAMHUB_RETAIN_ROLE_ON_FETCH_ERROR", &value)?;
        }
        if let Some(value) = lookup("TEAMHUB_LOG_LEVEL") {
            config.logging.level = value;
        }
        if let Some(value) = lookup("TEAMHUB_LOG_JSON") {
            config.logging.json = parse_bool("TEAMHUB_LOG_JSON", &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Get access configuration
    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .validate()
            .map_err(|e| GatewayError::Config(format!("Access config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| GatewayError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GatewayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

/// Load variables from a `.env`-style file; a missing file is not an error
pub fn load_env_file<P: AsRef<Path>>(path: P) -> Result<()> {
    dotenv_outcome(dotenvy::from_path(path.as_ref()))
}

fn dotenv_outcome<T>(result: std::result::Result<T, dotenvy::Error>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => {
            debug!("No .env file found");
            Ok(())
        }
        Err(e) => Err(GatewayError::Config(format!(
            "Failed to load .env file: {}",
            e
        ))),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(GatewayError::Config(format!(
            "Invalid boolean for {}: {}",
            key, value
        ))),
    }
}
