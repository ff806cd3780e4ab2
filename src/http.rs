//! Shared blocking HTTP plumbing for the API clients
//!
//! One GET per call, no retries and no rate limiting. Non-success statuses
//! become API errors carrying the status code; malformed JSON bodies become
//! API errors as well.

use crate::Result;
use crate::config::HttpConfig;
use crate::error::WeathercastError;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Build a blocking HTTP client from configuration
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    let timeout = Duration::from_secs(config.timeout_seconds.into());

    Client::builder()
        .timeout(timeout)
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| WeathercastError::general(format!("Failed to create HTTP client: {e}")))
}

/// GET a URL and deserialize its JSON body
pub fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    // Query strings can carry API keys, log only the path
    debug!("GET {}", url.split('?').next().unwrap_or(url));

    let response = client.get(url).send()?;
    let status = response.status();

    if !status.is_success() {
        warn!("Request failed with status {}", status);
        return Err(WeathercastError::api(format!(
            "Request failed with status {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown error")
        )));
    }

    response
        .json::<T>()
        .map_err(|e| WeathercastError::api(format!("Invalid JSON response: {e}")))
}
