//! Tests for date parsing and elapsed-time arithmetic
//!
//! Covers the accepted ISO 8601 input forms, the 365.25-day year basis,
//! and calendar helpers used to label schedule rows.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use core_kernel::temporal::{
    anniversary, first_day_of_year, new_year_after, parse_date, start_of_day, years_elapsed,
    TemporalError, DAYS_PER_YEAR,
};
use core_kernel::{Clock, FixedClock};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod parsing {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let parsed = parse_date("2023-01-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = parse_date("  2023-01-01\n").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset_converts_to_utc() {
        let parsed = parse_date("2023-06-15T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 6, 15, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_zulu() {
        let parsed = parse_date("2023-06-15T08:30:00.000Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 6, 15, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_timestamp_is_utc() {
        let parsed = parse_date("2023-06-15T08:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 6, 15, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        let result = parse_date("2023-02-30");
        assert!(matches!(result, Err(TemporalError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_rejects_empty_string() {
        assert!(matches!(parse_date(""), Err(TemporalError::InvalidDate(_))));
    }

    #[test]
    fn test_invalid_date_message_names_input() {
        let err = parse_date("15/06/2023").unwrap_err();
        assert_eq!(err.to_string(), "Invalid date: 15/06/2023");
    }
}

mod elapsed {
    use super::*;

    #[test]
    fn test_zero_span_is_zero_years() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(years_elapsed(at, at), Decimal::ZERO);
    }

    #[test]
    fn test_future_purchase_clamps_to_zero() {
        let from = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(years_elapsed(from, to), Decimal::ZERO);
    }

    #[test]
    fn test_four_calendar_years_are_exactly_four() {
        // 1461 days spans one leap day, matching four Julian years exactly
        let from = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
        let to = from + Duration::days(1461);
        assert_eq!(years_elapsed(from, to), dec!(4));
    }

    #[test]
    fn test_half_year() {
        let from = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        // 365.25 days * 24 hours / 2
        let to = from + Duration::hours(4383);
        assert_eq!(years_elapsed(from, to), dec!(0.5));
        assert_eq!(DAYS_PER_YEAR * dec!(12), dec!(4383));
    }

    #[test]
    fn test_fixed_clock_drives_elapsed_time() {
        let purchase = start_of_day(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        let clock = FixedClock::new(purchase + Duration::days(1461));
        assert_eq!(years_elapsed(purchase, clock.now()), dec!(4));
    }
}

mod calendar {
    use super::*;

    #[test]
    fn test_anniversary_plain_date() {
        let date = NaiveDate::from_ymd_opt(2022, 7, 14).unwrap();
        assert_eq!(anniversary(date, 3).unwrap(), NaiveDate::from_ymd_opt(2025, 7, 14).unwrap());
    }

    #[test]
    fn test_anniversary_zero_years_is_identity() {
        let date = NaiveDate::from_ymd_opt(2022, 7, 14).unwrap();
        assert_eq!(anniversary(date, 0).unwrap(), date);
    }

    #[test]
    fn test_leap_day_anniversary_in_leap_year() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(anniversary(date, 4).unwrap(), NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_anniversary_overflow_is_out_of_range() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(matches!(anniversary(date, u32::MAX), Err(TemporalError::OutOfRange(_))));
    }

    #[test]
    fn test_first_day_of_year() {
        assert_eq!(first_day_of_year(2030).unwrap(), NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
    }

    #[test]
    fn test_new_year_after_ignores_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2022, 11, 30).unwrap();
        assert_eq!(new_year_after(date, 1).unwrap(), NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }
}
