//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `picovent.toml` in the working directory unless a path is given.
//! Every field has a sensible default so the file is optional. Environment
//! variables take precedence over file values; the `--url` flag takes
//! precedence over both.

use std::path::Path;

use picovent_domain::binding::{DEFAULT_BINDINGS, MetricBinding};
use picovent_domain::error::ValidationError;
use serde::Deserialize;

/// Config file looked up when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "picovent.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device connection settings.
    pub device: DeviceConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Replacement binding table; empty means the built-in table.
    pub metrics: Vec<MetricBinding>,
}

/// Where the device answers.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Origin of the device API, e.g. `http://192.168.4.1`.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `picovent.toml`), then apply
    /// environment-variable overrides.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_file(Path::new(DEFAULT_CONFIG_FILE)).or_else(|err| match err {
                ConfigError::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                    Ok(Self::default())
                }
                other => Err(other),
            })?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("PICOVENT_URL") {
            self.device.base_url = val;
        }
        if let Some(val) = var("PICOVENT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Point the client at another device.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `base_url` is not an http(s) URL.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<(), ConfigError> {
        self.device.base_url = base_url.into();
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let rest = self
            .device
            .base_url
            .strip_prefix("http://")
            .or_else(|| self.device.base_url.strip_prefix("https://"));
        match rest {
            Some(host) if !host.trim_matches('/').is_empty() => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "base_url must be an http(s) URL, got {:?}",
                    self.device.base_url
                )));
            }
        }
        for binding in &self.metrics {
            binding.validate()?;
        }
        Ok(())
    }

    /// The bindings to refresh: the configured table, or the built-in one.
    #[must_use]
    pub fn bindings(&self) -> &[MetricBinding] {
        if self.metrics.is_empty() {
            &DEFAULT_BINDINGS
        } else {
            &self.metrics
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.4.1".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "picoventctl=info,picovent=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A metric binding breaks a domain invariant.
    #[error("invalid metric binding")]
    Binding(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
