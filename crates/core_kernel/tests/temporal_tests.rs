//! Comprehensive unit tests for the temporal helpers
//!
//! Tests cover ISO date parsing, calendar-month stepping with end-of-month
//! clamping, fixed-day offsets, and whole-month distances.

use chrono::NaiveDate;
use core_kernel::{add_days, add_months, parse_iso_date, whole_months_between, TemporalError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_parses_date_only_iso() {
        assert_eq!(parse_iso_date("2024-01-31").unwrap(), date(2024, 1, 31));
        assert_eq!(parse_iso_date("2024-12-01").unwrap(), date(2024, 12, 1));
    }

    #[test]
    fn test_rejects_other_formats() {
        for bad in ["31-01-2024", "2024/01/31", "2024-01-31T00:00:00Z", "today", ""] {
            assert!(
                matches!(parse_iso_date(bad), Err(TemporalError::InvalidDate(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(parse_iso_date("2023-02-29").is_err());
        assert!(parse_iso_date("2024-13-01").is_err());
    }
}

mod month_arithmetic {
    use super::*;

    #[test]
    fn test_plain_month_step() {
        assert_eq!(add_months(date(2024, 1, 15), 1).unwrap(), date(2024, 2, 15));
        assert_eq!(add_months(date(2024, 1, 15), 12).unwrap(), date(2025, 1, 15));
    }

    #[test]
    fn test_clamps_to_last_day_of_shorter_month() {
        // Jan 31 + 1 month lands on Feb 29 in a leap year, Feb 28 otherwise
        assert_eq!(add_months(date(2024, 1, 31), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 1, 31), 1).unwrap(), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 5, 31), 1).unwrap(), date(2024, 6, 30));
    }

    #[test]
    fn test_year_rollover() {
        assert_eq!(add_months(date(2024, 12, 15), 2).unwrap(), date(2025, 2, 15));
    }

    #[test]
    fn test_zero_months_is_identity() {
        assert_eq!(add_months(date(2024, 6, 30), 0).unwrap(), date(2024, 6, 30));
    }
}

mod day_arithmetic {
    use super::*;

    #[test]
    fn test_thirty_day_offset() {
        assert_eq!(add_days(date(2024, 1, 1), 30).unwrap(), date(2024, 1, 31));
        assert_eq!(add_days(date(2024, 2, 1), 30).unwrap(), date(2024, 3, 2));
    }

    #[test]
    fn test_crosses_leap_day() {
        assert_eq!(add_days(date(2024, 2, 28), 1).unwrap(), date(2024, 2, 29));
        assert_eq!(add_days(date(2023, 2, 28), 1).unwrap(), date(2023, 3, 1));
    }
}

mod month_distance {
    use super::*;

    #[test]
    fn test_same_day_counts_whole_months() {
        assert_eq!(whole_months_between(date(2024, 1, 1), date(2024, 6, 1)), 5);
    }

    #[test]
    fn test_day_before_anniversary_rounds_down() {
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 6, 14)), 4);
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 6, 15)), 5);
    }

    #[test]
    fn test_same_date_is_zero() {
        assert_eq!(whole_months_between(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_reversed_order_clamps_to_zero() {
        assert_eq!(whole_months_between(date(2024, 6, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_multi_year_spans() {
        assert_eq!(whole_months_between(date(2020, 3, 10), date(2024, 3, 10)), 48);
        assert_eq!(whole_months_between(date(2020, 3, 10), date(2024, 3, 9)), 47);
    }
}
