//! Date-range filtering of forecast periods
//!
//! Pure functions over in-memory lists; source order is preserved.

use crate::models::{DailyPeriod, DateRange, ForecastPeriod};
use chrono::NaiveDate;

fn in_range<T>(items: Vec<T>, range: &DateRange, date_of: impl Fn(&T) -> NaiveDate) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| range.contains(date_of(item)))
        .collect()
}

/// Keep the daily forecast entries whose date falls within the range
#[must_use]
pub fn daily_in_range(periods: Vec<DailyPeriod>, range: &DateRange) -> Vec<DailyPeriod> {
    in_range(periods, range, |period| period.date)
}

/// Keep the NWS forecast periods whose local start date falls within the range
#[must_use]
pub fn periods_in_range(periods: Vec<ForecastPeriod>, range: &DateRange) -> Vec<ForecastPeriod> {
    in_range(periods, range, ForecastPeriod::date)
}
