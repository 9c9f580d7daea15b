//! Calendar handling for the reporting windows
//!
//! Externally supplied dates use the national `DD-MM-YYYY` form; everything
//! produced internally is a `chrono::NaiveDate` and serializes as ISO 8601.
//! "Today" is never read from a clock in here: callers resolve `now` once at
//! the edge (see [`Timezone::today`]) and pass it down.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper for the reporting jurisdiction
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::InvalidTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the local calendar date for a UTC instant
    pub fn today(&self, utc: DateTime<Utc>) -> NaiveDate {
        utc.with_timezone(&self.0).date_naive()
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Europe::Oslo)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod {
        start: String,
        end: String,
    },

    #[error("Unparseable date '{0}', expected DD-MM-YYYY")]
    UnparseableDate(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// Parses a national-format date (`DD-MM-YYYY`)
///
/// `DD.MM.YYYY` is accepted as well since both forms appear in exports.
/// Surrounding whitespace is ignored; anything else is an error.
pub fn parse_national_date(raw: &str) -> Result<NaiveDate, TemporalError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d.%m.%Y"))
        .map_err(|_| TemporalError::UnparseableDate(raw.to_string()))
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// The trailing twelve months ending on `now`, both ends inclusive
    ///
    /// Month arithmetic is calendar based, so 29 February maps to
    /// 28 February of the previous year.
    pub fn trailing_year(now: NaiveDate) -> Self {
        let start = now.checked_sub_months(Months::new(12)).unwrap_or(NaiveDate::MIN);
        Self { start, end: now }
    }

    /// 1 January to 31 December of `year`
    pub fn calendar_year(year: i32) -> Result<Self, TemporalError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1);
        let end = NaiveDate::from_ymd_opt(year, 12, 31);
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(TemporalError::InvalidPeriod {
                start: format!("{}-01-01", year),
                end: format!("{}-12-31", year),
            }),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Number of months of `now`'s year counted as elapsed
///
/// The running month counts as a whole month, so 15 August gives 8.
pub fn months_elapsed(now: NaiveDate) -> u32 {
    now.month()
}
