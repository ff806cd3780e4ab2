//! Data models for locations, date ranges, and forecast periods

pub mod forecast;
pub mod location;
pub mod range;

pub use forecast::{DailyPeriod, ForecastPeriod};
pub use location::Location;
pub use range::DateRange;
