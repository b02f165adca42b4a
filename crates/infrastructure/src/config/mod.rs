//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP listener and logging settings
//!
//! The `weather` section reuses the upstream client's own configuration type.
//! Every field has a default, so the service starts without any config file.

mod server;

use std::path::Path;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use server::ServerConfig;

/// Prefix for environment overrides, e.g. `FORECAST_SERVER__PORT=9090`
pub const ENV_PREFIX: &str = "FORECAST";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// A configuration value failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid configuration for `{field}`: {reason}")]
pub struct InvalidConfig {
    /// Dotted path of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub reason: String,
}

impl InvalidConfig {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.*` in the working directory and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file (or `config.*` when `None`),
    /// then apply environment overrides
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(file)
            // Override with environment variables (e.g., FORECAST_WEATHER__USER_AGENT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Check values that would only fail later, at request time
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.weather.user_agent.trim().is_empty() {
            return Err(InvalidConfig::new(
                "weather.user_agent",
                "must not be empty; the weather API rejects anonymous clients",
            ));
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(InvalidConfig::new(
                "weather.base_url",
                format!("'{}' is not an HTTP or HTTPS URL", self.weather.base_url),
            ));
        }

        if self.weather.timeout_secs == 0 {
            return Err(InvalidConfig::new(
                "weather.timeout_secs",
                "must be greater than zero",
            ));
        }

        let log_format = self.server.log_format.to_lowercase();
        if log_format != "text" && log_format != "json" {
            return Err(InvalidConfig::new(
                "server.log_format",
                format!("'{}' must be 'text' or 'json'", self.server.log_format),
            ));
        }

        Ok(())
    }
}
