//! Inclusive calendar date range with a bounded span

use crate::Result;
use crate::error::WeathercastError;
use chrono::{Duration, NaiveDate};

/// Maximum number of days between the start and end of a range
pub const MAX_RANGE_DAYS: i64 = 7;

/// An inclusive range of calendar dates, at most [`MAX_RANGE_DAYS`] days wide.
///
/// The constructor enforces the invariants, so a value of this type is always
/// well-formed.
// No serde here: deserialization would sidestep the constructor's checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a validated date range
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(WeathercastError::validation(
                "End date must not be before the start date.",
            ));
        }

        if end - start > Duration::days(MAX_RANGE_DAYS) {
            return Err(WeathercastError::validation(format!(
                "Date range cannot exceed {MAX_RANGE_DAYS} days."
            )));
        }

        Ok(Self { start, end })
    }

    /// First date of the range
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the range
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the given date falls within the range, bounds included
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_single_day_range_allowed() {
        let range = DateRange::new(date("2026-09-01"), date("2026-09-01")).unwrap();
        assert!(range.contains(date("2026-09-01")));
        assert!(!range.contains(date("2026-09-02")));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = DateRange::new(date("2026-09-10"), date("2026-09-01")).unwrap_err();
        assert!(err.user_message().contains("before the start date"));
    }

    #[rstest]
    #[case("2026-09-01", "2026-09-08", true)] // exactly 7 days apart
    #[case("2026-09-01", "2026-09-09", false)] // 8 days apart
    #[case("2026-09-01", "2026-09-30", false)]
    fn test_span_limit(#[case] start: &str, #[case] end: &str, #[case] ok: bool) {
        assert_eq!(DateRange::new(date(start), date(end)).is_ok(), ok);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(date("2026-09-01"), date("2026-09-05")).unwrap();
        assert!(range.contains(date("2026-09-01")));
        assert!(range.contains(date("2026-09-05")));
        assert!(range.contains(date("2026-09-03")));
        assert!(!range.contains(date("2026-08-31")));
        assert!(!range.contains(date("2026-09-06")));
    }
}
