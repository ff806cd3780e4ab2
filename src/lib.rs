//! `Weathercast` - interactive weather forecast lookup
//!
//! This library backs two small interactive binaries that geocode a
//! user-supplied location, fetch a forecast from a weather API, filter the
//! forecast by an inclusive date range, and print the result to the console.

pub mod config;
pub mod error;
pub mod filter;
pub mod geocoding;
pub mod http;
pub mod input;
pub mod models;
pub mod nws;
pub mod opencage;
pub mod openweather;
pub mod report;

// Re-export core types for public API
pub use config::WeathercastConfig;
pub use error::WeathercastError;
pub use models::{DailyPeriod, DateRange, ForecastPeriod, Location};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeathercastError>;
