//! OpenWeatherMap One Call client (used by the `openweather` binary)

use crate::Result;
use crate::config::WeathercastConfig;
use crate::error::WeathercastError;
use crate::http;
use crate::models::DailyPeriod;
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::info;

/// Client for the OpenWeatherMap One Call API
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Create a new client; fails when no API key is configured
    pub fn new(config: &WeathercastConfig) -> Result<Self> {
        let api_key = config.forecast.openweather_api_key.clone().ok_or_else(|| {
            WeathercastError::config(
                "Missing OpenWeatherMap API key \
                 (set forecast.openweather_api_key or WEATHERCAST_FORECAST__OPENWEATHER_API_KEY)",
            )
        })?;

        Ok(Self {
            client: http::build_client(&config.http)?,
            base_url: config.forecast.openweather_base_url.clone(),
            api_key,
        })
    }

    /// Fetch the daily forecast for the given coordinates (metric units)
    pub fn daily_forecast(&self, lat: f64, lon: f64) -> Result<Vec<DailyPeriod>> {
        info!("Fetching daily forecast for {:.4}, {:.4}", lat, lon);

        let url = format!(
            "{}/onecall?lat={lat}&lon={lon}&exclude=minutely,hourly&units=metric&appid={}",
            self.base_url, self.api_key
        );

        let response: OneCallResponse = http::get_json(&self.client, &url)?;

        info!("Received {} daily forecast entries", response.daily.len());

        Ok(response.daily.into_iter().map(DailyPeriod::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct OneCallResponse {
    #[serde(default)]
    daily: Vec<DailyEntry>,
}

#[derive(Debug, Deserialize)]
struct DailyEntry {
    /// Unix timestamp of the forecast day
    dt: i64,
    temp: DailyTemp,
    #[serde(default)]
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct DailyTemp {
    day: f64,
    night: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

impl From<DailyEntry> for DailyPeriod {
    fn from(entry: DailyEntry) -> Self {
        let date = DateTime::from_timestamp(entry.dt, 0)
            .map_or_else(|| Utc::now().date_naive(), |dt| dt.date_naive());

        let description = entry
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .unwrap_or_default();

        Self {
            date,
            day_temp: entry.temp.day,
            night_temp: entry.temp.night,
            description,
        }
    }
}
