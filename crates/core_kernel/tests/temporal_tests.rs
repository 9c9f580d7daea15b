//! Tests for national dates and reporting windows

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::{months_elapsed, parse_national_date, DateRange, TemporalError, Timezone};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn test_both_separators_are_accepted() {
        assert_eq!(parse_national_date("29-02-2024"), Ok(date(2024, 2, 29)));
        assert_eq!(parse_national_date("29.02.2024"), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn test_impossible_dates_are_rejected() {
        assert_eq!(
            parse_national_date("29-02-2025"),
            Err(TemporalError::UnparseableDate("29-02-2025".to_string()))
        );
        assert!(parse_national_date("32-01-2025").is_err());
        assert!(parse_national_date("ukjent").is_err());
    }
}

mod windows {
    use super::*;

    #[test]
    fn test_range_rejects_reversed_bounds() {
        assert!(DateRange::new(date(2025, 2, 1), date(2025, 1, 1)).is_err());
        assert!(DateRange::new(date(2025, 1, 1), date(2025, 1, 1)).is_ok());
    }

    #[test]
    fn test_calendar_year_bounds() {
        let year = DateRange::calendar_year(2024).unwrap();
        assert!(year.contains(date(2024, 1, 1)));
        assert!(year.contains(date(2024, 12, 31)));
        assert!(!year.contains(date(2025, 1, 1)));
        assert_eq!(year.days(), 365);
    }

    #[test]
    fn test_trailing_year_spans_year_boundary() {
        let window = DateRange::trailing_year(date(2026, 1, 1));
        assert_eq!(window.start, date(2025, 1, 1));
        assert!(window.contains(date(2025, 6, 30)));
    }

    #[test]
    fn test_months_elapsed_counts_running_month() {
        assert_eq!(months_elapsed(date(2024, 2, 29)), 2);
    }
}

mod timezones {
    use super::*;

    #[test]
    fn test_today_follows_oslo_calendar() {
        let late_evening_utc = Utc.with_ymd_and_hms(2025, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(Timezone::default().today(late_evening_utc), date(2026, 1, 1));
    }

    #[test]
    fn test_timezone_parse_and_display() {
        let tz: Timezone = "Europe/Stockholm".parse().unwrap();
        assert_eq!(tz.to_string(), "Europe/Stockholm");
        assert!("Mars/Olympus".parse::<Timezone>().is_err());
    }

    #[test]
    fn test_timezone_deserializes_from_name() {
        let tz: Timezone = serde_json::from_str("\"Europe/Oslo\"").unwrap();
        assert_eq!(tz, Timezone::default());
    }
}
