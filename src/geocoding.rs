//! Open-Meteo geocoding client (used by the `nws` binary, no API key needed)

use crate::Result;
use crate::config::WeathercastConfig;
use crate::error::WeathercastError;
use crate::http;
use crate::models::Location;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

/// Client for the Open-Meteo geocoding search API
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Create a new client
    pub fn new(config: &WeathercastConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(&config.http)?,
            base_url: config.geocoding.open_meteo_base_url.clone(),
        })
    }

    /// Resolve a free-text location to coordinates; the first result wins
    pub fn geocode(&self, query: &str) -> Result<Location> {
        info!("Geocoding location: '{}'", query);

        let url = format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(query)
        );

        let response: GeocodingResponse = http::get_json(&self.client, &url)?;

        let result = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| {
                WeathercastError::api(format!("No geocoding results found for '{query}'."))
            })?;

        info!(
            "Found location: {} ({:.4}, {:.4})",
            result.name, result.latitude, result.longitude
        );

        Ok(result.into())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country_code: Option<String>,
    admin1: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        let name = match &result.admin1 {
            Some(admin1) => format!("{}, {}", result.name, admin1),
            None => result.name,
        };

        match result.country_code {
            Some(country) => {
                Location::with_country(result.latitude, result.longitude, name, country)
            }
            None => Location::new(result.latitude, result.longitude, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "id": 5746545,
                "name": "Portland",
                "latitude": 45.52345,
                "longitude": -122.67621,
                "country_code": "US",
                "country": "United States",
                "admin1": "Oregon",
                "timezone": "America/Los_Angeles"
            }
        ],
        "generationtime_ms": 0.6
    }"#;

    #[test]
    fn test_parse_geocoding_response() {
        let response: GeocodingResponse = serde_json::from_str(SAMPLE).unwrap();
        let location: Location = response
            .results
            .unwrap()
            .into_iter()
            .next()
            .unwrap()
            .into();

        assert_eq!(location.name, "Portland, Oregon");
        assert_eq!(location.latitude, 45.52345);
        assert_eq!(location.country.as_deref(), Some("US"));
    }

    #[test]
    fn test_no_results_field() {
        // Open-Meteo omits "results" entirely when nothing matched
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.2}"#).unwrap();
        assert!(response.results.is_none());
    }
}
