//! Configuration management for `weathercast`
//!
//! Handles loading configuration from an optional TOML file and environment
//! variables, and provides validation for all configuration settings.
//!
//! Environment overrides use the `WEATHERCAST_` prefix with `__` as the key
//! separator, e.g. `WEATHERCAST_GEOCODING__OPENCAGE_API_KEY`.

use crate::Result;
use crate::error::WeathercastError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `weathercast` binaries
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeathercastConfig {
    /// Geocoding provider configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Forecast provider configuration
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Geocoding provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// OpenCage API key (required by the `openweather` binary)
    pub opencage_api_key: Option<String>,
    /// Base URL for the OpenCage geocoding API
    #[serde(default = "default_opencage_base_url")]
    pub opencage_base_url: String,
    /// Base URL for the Open-Meteo geocoding API (no API key required)
    #[serde(default = "default_open_meteo_base_url")]
    pub open_meteo_base_url: String,
}

/// Forecast provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// OpenWeatherMap API key (required by the `openweather` binary)
    pub openweather_api_key: Option<String>,
    /// Base URL for the OpenWeatherMap API
    #[serde(default = "default_openweather_base_url")]
    pub openweather_base_url: String,
    /// Base URL for the National Weather Service API
    #[serde(default = "default_nws_base_url")]
    pub nws_base_url: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// User agent sent with every request (the NWS API rejects requests
    /// without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_opencage_base_url() -> String {
    "https://api.opencagedata.com".to_string()
}

fn default_open_meteo_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_openweather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_nws_base_url() -> String {
    "https://api.weather.gov".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("weathercast/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            opencage_api_key: None,
            opencage_base_url: default_opencage_base_url(),
            open_meteo_base_url: default_open_meteo_base_url(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            openweather_api_key: None,
            openweather_base_url: default_openweather_base_url(),
            nws_base_url: default_nws_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl WeathercastConfig {
    /// Load configuration from the default file location and environment
    /// variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from the specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("WEATHERCAST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| WeathercastError::config(format!("Failed to build configuration: {e}")))?;

        let config: WeathercastConfig = settings.try_deserialize().map_err(|e| {
            WeathercastError::config(format!("Failed to deserialize configuration: {e}"))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weathercast").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_seconds == 0 {
            return Err(WeathercastError::config(
                "http.timeout_seconds must be greater than zero",
            ));
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(WeathercastError::config("http.user_agent must not be empty"));
        }

        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(WeathercastError::config(format!(
                "logging.level must be one of {LEVELS:?}, got '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
