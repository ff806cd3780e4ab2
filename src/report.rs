//! Console presentation of filtered forecasts

use crate::Result;
use crate::models::{DailyPeriod, ForecastPeriod};
use std::io::Write;

const NO_DATA_MESSAGE: &str = "No weather data available for the given date range.";

/// Print OpenWeatherMap daily forecast entries
pub fn print_daily<W: Write>(out: &mut W, periods: &[DailyPeriod]) -> Result<()> {
    if periods.is_empty() {
        writeln!(out, "{NO_DATA_MESSAGE}")?;
        return Ok(());
    }

    for period in periods {
        writeln!(out, "Date: {}", period.date.format("%Y-%m-%d"))?;
        writeln!(out, "Day Temperature: {}", period.format_day_temperature())?;
        writeln!(
            out,
            "Night Temperature: {}",
            period.format_night_temperature()
        )?;
        writeln!(out, "Weather: {}", period.format_description())?;
        writeln!(out)?;
    }

    Ok(())
}

/// Print NWS forecast periods
pub fn print_periods<W: Write>(out: &mut W, periods: &[ForecastPeriod]) -> Result<()> {
    if periods.is_empty() {
        writeln!(out, "{NO_DATA_MESSAGE}")?;
        return Ok(());
    }

    for period in periods {
        writeln!(out, "{} ({})", period.name, period.date().format("%Y-%m-%d"))?;
        writeln!(out, "Temperature: {}", period.format_temperature())?;
        writeln!(out, "Conditions: {}", period.short_forecast)?;
        writeln!(out, "{}", period.detailed_forecast)?;
        writeln!(out)?;
    }

    Ok(())
}
