//! Forecast period models for both provider variants

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of an OpenWeatherMap daily forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyPeriod {
    /// Calendar date of this forecast day (UTC)
    pub date: NaiveDate,
    /// Daytime temperature in Celsius
    pub day_temp: f64,
    /// Nighttime temperature in Celsius
    pub night_temp: f64,
    /// Weather condition description as returned by the API (lowercase)
    pub description: String,
}

impl DailyPeriod {
    /// Format daytime temperature with unit
    #[must_use]
    pub fn format_day_temperature(&self) -> String {
        format!("{:.1} °C", self.day_temp)
    }

    /// Format nighttime temperature with unit
    #[must_use]
    pub fn format_night_temperature(&self) -> String {
        format!("{:.1} °C", self.night_temp)
    }

    /// Format the description with its first letter capitalized
    #[must_use]
    pub fn format_description(&self) -> String {
        let mut chars = self.description.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// One period of a National Weather Service forecast
///
/// NWS splits each day into named periods such as "Tuesday" and
/// "Tuesday Night".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastPeriod {
    /// Period name, e.g. "Tuesday Night"
    pub name: String,
    /// Start of the period, carrying the forecast office's local UTC offset
    pub start_time: DateTime<FixedOffset>,
    /// Temperature in whole degrees
    pub temperature: i32,
    /// Temperature unit, "F" or "C"
    pub unit: String,
    /// One-line summary, e.g. "Partly Cloudy"
    pub short_forecast: String,
    /// Full prose forecast for the period
    pub detailed_forecast: String,
}

impl ForecastPeriod {
    /// Local calendar date on which this period starts
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{} °{}", self.temperature, self.unit)
    }
}
