//! OpenCage geocoding client (used by the `openweather` binary)

use crate::Result;
use crate::config::WeathercastConfig;
use crate::error::WeathercastError;
use crate::http;
use crate::models::Location;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Client for the OpenCage forward geocoding API
#[derive(Debug)]
pub struct OpenCageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenCageClient {
    /// Create a new client; fails when no API key is configured
    pub fn new(config: &WeathercastConfig) -> Result<Self> {
        let api_key = config.geocoding.opencage_api_key.clone().ok_or_else(|| {
            WeathercastError::config(
                "Missing OpenCage API key \
                 (set geocoding.opencage_api_key or WEATHERCAST_GEOCODING__OPENCAGE_API_KEY)",
            )
        })?;

        Ok(Self {
            client: http::build_client(&config.http)?,
            base_url: config.geocoding.opencage_base_url.clone(),
            api_key,
        })
    }

    /// Resolve a free-text location to coordinates; the first result wins
    pub fn geocode(&self, query: &str) -> Result<Location> {
        info!("Geocoding location: '{}'", query);

        let url = format!(
            "{}/geocode/v1/json?q={}&key={}&limit=1&no_annotations=1",
            self.base_url,
            urlencoding::encode(query),
            self.api_key
        );

        let response: GeocodeResponse = http::get_json(&self.client, &url)?;

        let result = response.results.into_iter().next().ok_or_else(|| {
            WeathercastError::api(format!("No geocoding results found for '{query}'."))
        })?;

        debug!(
            "Coordinates fetched: {}, {}",
            result.geometry.lat, result.geometry.lng
        );

        Ok(result.into())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
    formatted: Option<String>,
    components: Option<Components>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct Components {
    country_code: Option<String>,
}

impl From<GeocodeResult> for Location {
    fn from(result: GeocodeResult) -> Self {
        let name = result.formatted.unwrap_or_else(|| {
            format!("{:.4}, {:.4}", result.geometry.lat, result.geometry.lng)
        });

        match result.components.and_then(|c| c.country_code) {
            Some(country) => Location::with_country(
                result.geometry.lat,
                result.geometry.lng,
                name,
                country.to_ascii_uppercase(),
            ),
            None => Location::new(result.geometry.lat, result.geometry.lng, name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "formatted": "Tokyo, 100-0001, Japan",
                "geometry": { "lat": 35.6762, "lng": 139.6503 },
                "components": { "country_code": "jp" }
            }
        ],
        "status": { "code": 200, "message": "OK" }
    }"#;

    #[test]
    fn test_parse_geocode_response() {
        let response: GeocodeResponse = serde_json::from_str(SAMPLE).unwrap();
        let location: Location = response.results.into_iter().next().unwrap().into();

        assert_eq!(location.latitude, 35.6762);
        assert_eq!(location.longitude, 139.6503);
        assert_eq!(location.name, "Tokyo, 100-0001, Japan");
        assert_eq!(location.country.as_deref(), Some("JP"));
    }

    #[test]
    fn test_empty_results_deserialize() {
        let response: GeocodeResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_missing_results_field_defaults() {
        let response: GeocodeResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = WeathercastConfig::default();
        let err = OpenCageClient::new(&config).unwrap_err();
        assert!(matches!(err, WeathercastError::Config { .. }));
    }
}
