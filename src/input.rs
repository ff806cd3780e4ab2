//! Interactive console input and validation
//!
//! All readers and writers are generic so the prompt flow can be unit tested
//! against in-memory buffers. Every rejection happens before any network
//! activity.

use crate::Result;
use crate::error::WeathercastError;
use crate::models::DateRange;
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// A location query split into its city and region parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    /// City name
    pub city: String,
    /// Region qualifier: a ZIP/postal code or a state abbreviation
    pub region: String,
}

impl LocationQuery {
    /// Recombine the parts into the provider query string
    #[must_use]
    pub fn query_string(&self) -> String {
        format!("{}, {}", self.city, self.region)
    }
}

/// Write a prompt and read one trimmed line from the reader
pub fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt for a "City, ZIP" location (variant A)
pub fn read_city_zip<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<LocationQuery> {
    let line = prompt_line(
        reader,
        writer,
        "Enter a location (city, zip code) [Ex: Tokyo, 100-0001]: ",
    )?;
    parse_city_zip(&line)
}

/// Prompt for a "City, ST" location (variant B)
pub fn read_city_state<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<LocationQuery> {
    let line = prompt_line(
        reader,
        writer,
        "Enter a location (city, state) [Ex: Portland, OR]: ",
    )?;
    parse_city_state(&line)
}

/// Prompt for start and end dates and build a validated range
pub fn read_date_range<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<DateRange> {
    let start = prompt_line(reader, writer, "Enter start date (YYYY-MM-DD): ")?;
    let start = parse_date(&start)?;

    let end = prompt_line(reader, writer, "Enter end date (YYYY-MM-DD): ")?;
    let end = parse_date(&end)?;

    DateRange::new(start, end)
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        WeathercastError::validation("Invalid date format. Please use YYYY-MM-DD.")
    })
}

/// Parse a "City, ZIP" location, e.g. `Tokyo, 100-0001`
pub fn parse_city_zip(input: &str) -> Result<LocationQuery> {
    if let Some((city, zip)) = split_location(input) {
        if is_city(city) && is_zip(zip) {
            return Ok(LocationQuery {
                city: city.to_string(),
                region: zip.to_string(),
            });
        }
    }

    Err(WeathercastError::validation(
        "Invalid location format. Please use the format 'City, ZIP Code' (e.g., Tokyo, 100-0001).",
    ))
}

/// Parse a "City, ST" location, e.g. `Portland, OR`
pub fn parse_city_state(input: &str) -> Result<LocationQuery> {
    if let Some((city, state)) = split_location(input) {
        if is_city(city) && is_state(state) {
            return Ok(LocationQuery {
                city: city.to_string(),
                region: state.to_ascii_uppercase(),
            });
        }
    }

    Err(WeathercastError::validation(
        "Invalid location format. Please use the format 'City, ST' (e.g., Portland, OR).",
    ))
}

/// Split a location line at its comma into trimmed city and region parts
fn split_location(input: &str) -> Option<(&str, &str)> {
    let (city, region) = input.split_once(',')?;
    let city = city.trim();
    let region = region.trim();
    if city.is_empty() || region.is_empty() {
        return None;
    }
    Some((city, region))
}

fn is_city(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_alphanumeric() || c.is_whitespace() || c == '_')
}

// ZIP codes in the 123-4567 style accepted by the geocoder
fn is_zip(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 8
        && bytes[..3].iter().all(u8::is_ascii_digit)
        && bytes[3] == b'-'
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

fn is_state(input: &str) -> bool {
    input.len() == 2 && input.chars().all(|c| c.is_ascii_alphabetic())
}
