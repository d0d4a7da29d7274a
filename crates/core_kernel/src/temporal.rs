//! Date handling for asset valuation
//!
//! Elapsed time is measured on a fixed Julian year of 365.25 days. There is no
//! calendar-month precision and no leap-year-exact arithmetic; callers that need
//! "N years later" on the calendar use [`anniversary`] instead.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Length of a year in days used for elapsed-time calculations
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Errors related to temporal operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

/// Parses an ISO 8601 date or timestamp into a UTC instant
///
/// Accepted forms:
/// - `2024-03-15` (midnight UTC)
/// - `2024-03-15T10:30:00Z` or any RFC 3339 timestamp with an offset
/// - `2024-03-15T10:30:00` (no offset, read as UTC)
///
/// # Errors
///
/// Returns [`TemporalError::InvalidDate`] if the input matches none of the forms.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>, TemporalError> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| TemporalError::InvalidDate(input.to_string()))
}

/// Returns midnight UTC at the start of the given date
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Years elapsed between two instants on a 365.25-day year
///
/// Negative spans (a `to` before `from`) clamp to zero.
pub fn years_elapsed(from: DateTime<Utc>, to: DateTime<Utc>) -> Decimal {
    let millis = (to - from).num_milliseconds();
    if millis <= 0 {
        return Decimal::ZERO;
    }

    Decimal::from(millis) / (Decimal::from(MILLIS_PER_DAY) * DAYS_PER_YEAR)
}

/// Returns the date `years` calendar years after `date`
///
/// February 29 maps to February 28 in non-leap target years.
pub fn anniversary(date: NaiveDate, years: u32) -> Result<NaiveDate, TemporalError> {
    years
        .checked_mul(12)
        .and_then(|months| date.checked_add_months(Months::new(months)))
        .ok_or_else(|| TemporalError::OutOfRange(format!("{date} + {years} years")))
}

/// Returns January 1 of the given year
pub fn first_day_of_year(year: i32) -> Result<NaiveDate, TemporalError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| TemporalError::OutOfRange(format!("year {year}")))
}

/// Returns January 1 of the year `offset` years after the year of `date`
pub fn new_year_after(date: NaiveDate, offset: u32) -> Result<NaiveDate, TemporalError> {
    let offset = i32::try_from(offset)
        .map_err(|_| TemporalError::OutOfRange(format!("{date} + {offset} years")))?;
    let year = date
        .year()
        .checked_add(offset)
        .ok_or_else(|| TemporalError::OutOfRange(format!("{date} + {offset} years")))?;
    first_day_of_year(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_parse_plain_date_is_midnight_utc() {
        let parsed = parse_date("2024-03-15").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = parse_date("not-a-date");
        assert_eq!(result, Err(TemporalError::InvalidDate("not-a-date".to_string())));
    }

    #[test]
    fn test_one_julian_year_is_one() {
        let from = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let to = from + Duration::hours(365 * 24 + 6);
        assert_eq!(years_elapsed(from, to), dec!(1));
    }

    #[test]
    fn test_anniversary_of_leap_day() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(anniversary(leap, 1).unwrap(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }
}
