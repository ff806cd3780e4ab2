//! Error types and handling for the `weathercast` crate

use thiserror::Error;

/// Main error type for the `weathercast` crate
#[derive(Error, Debug)]
pub enum WeathercastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// HTTP transport errors
    #[error("HTTP error: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl WeathercastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeathercastError::Config { message } => {
                format!("Configuration error: {message}")
            }
            // API messages carry the HTTP status code when one was involved,
            // so they are surfaced verbatim.
            WeathercastError::Api { message } => message.clone(),
            WeathercastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WeathercastError::Http { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            WeathercastError::Io { .. } => "Console I/O operation failed.".to_string(),
            WeathercastError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeathercastError::config("missing API key");
        assert!(matches!(config_err, WeathercastError::Config { .. }));

        let api_err = WeathercastError::api("connection failed");
        assert!(matches!(api_err, WeathercastError::Api { .. }));

        let validation_err = WeathercastError::validation("invalid date");
        assert!(matches!(validation_err, WeathercastError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = WeathercastError::config("missing OpenCage API key");
        assert!(config_err.user_message().contains("Configuration error"));
        assert!(config_err.user_message().contains("OpenCage"));

        let api_err = WeathercastError::api("Request failed with status 503");
        assert!(api_err.user_message().contains("503"));

        let validation_err = WeathercastError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "stream closed");
        let err: WeathercastError = io_err.into();
        assert!(matches!(err, WeathercastError::Io { .. }));
    }
}
