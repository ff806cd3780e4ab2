//! National Weather Service forecast client (used by the `nws` binary)
//!
//! Fetching a forecast takes two hops: `/points/{lat},{lon}` resolves the
//! forecast URL for the grid cell covering the coordinates, and that URL
//! serves the actual forecast periods.

use crate::Result;
use crate::config::WeathercastConfig;
use crate::http;
use crate::models::ForecastPeriod;
use chrono::{DateTime, FixedOffset};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// Client for the api.weather.gov forecast API
pub struct NwsClient {
    client: Client,
    base_url: String,
}

impl NwsClient {
    /// Create a new client
    pub fn new(config: &WeathercastConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(&config.http)?,
            base_url: config.forecast.nws_base_url.clone(),
        })
    }

    /// Fetch the forecast periods for the given coordinates
    pub fn forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastPeriod>> {
        info!("Fetching NWS forecast for {:.4}, {:.4}", lat, lon);

        // NWS rejects coordinates with more than four decimal places
        let url = format!("{}/points/{lat:.4},{lon:.4}", self.base_url);
        let points: PointsResponse = http::get_json(&self.client, &url)?;

        debug!("Resolved forecast URL: {}", points.properties.forecast);

        let forecast: ForecastResponse =
            http::get_json(&self.client, &points.properties.forecast)?;

        info!(
            "Received {} forecast periods",
            forecast.properties.periods.len()
        );

        Ok(forecast
            .properties
            .periods
            .into_iter()
            .map(ForecastPeriod::from)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    /// URL of the forecast for this grid point
    forecast: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<WirePeriod>,
}

#[derive(Debug, Deserialize)]
struct WirePeriod {
    name: String,
    #[serde(rename = "startTime")]
    start_time: DateTime<FixedOffset>,
    temperature: i32,
    #[serde(rename = "temperatureUnit")]
    temperature_unit: String,
    #[serde(rename = "shortForecast")]
    short_forecast: String,
    #[serde(rename = "detailedForecast")]
    detailed_forecast: String,
}

impl From<WirePeriod> for ForecastPeriod {
    fn from(period: WirePeriod) -> Self {
        Self {
            name: period.name,
            start_time: period.start_time,
            temperature: period.temperature,
            unit: period.temperature_unit,
            short_forecast: period.short_forecast,
            detailed_forecast: period.detailed_forecast,
        }
    }
}
