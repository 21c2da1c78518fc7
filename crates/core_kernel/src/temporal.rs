//! Date-only temporal helpers
//!
//! Loan servicing works in calendar dates end to end: dates cross every
//! boundary as ISO-8601 date strings with no time component, which keeps
//! schedules immune to timezone off-by-one shifts. This module provides the
//! calendar arithmetic the domain needs on top of [`chrono::NaiveDate`].

use chrono::{Datelike, Days, Months, NaiveDate};
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Parses a date-only ISO-8601 string ("2024-01-31")
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| TemporalError::InvalidDate(value.to_string()))
}

/// Adds calendar months, clamping the day-of-month to the last day of the
/// target month (Jan 31 + 1 month = Feb 29 in a leap year).
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, TemporalError> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| TemporalError::OutOfRange(date.to_string()))
}

/// Adds a fixed number of days
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, TemporalError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| TemporalError::OutOfRange(date.to_string()))
}

/// Returns the number of whole calendar months from `start` to `end`,
/// or zero when `end` precedes `start`.
///
/// A month counts once `end` reaches the same day-of-month as `start`
/// (2024-01-15 to 2024-03-14 is 1 whole month; to 2024-03-15 is 2).
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}
