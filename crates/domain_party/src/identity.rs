//! Norwegian national identity numbers
//!
//! Validates fødselsnummer and D-nummer (11 digits, `DDMMYY` + individual
//! number + two check digits) and decodes birth date and sex.
//!
//! Validation is fail-fast: the first violated rule is reported and nothing
//! further is checked. An empty input is valid and asserts nothing.
//!
//! # Day table
//!
//! Day-of-month validation uses a fixed table with February at 29 days for
//! every year. 29 February therefore passes in non-leap years; the result is
//! `valid` but carries no `birth_date`, since that calendar date does not
//! exist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in a fødselsnummer / D-nummer
pub const ID_LENGTH: usize = 11;

const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const CHECK1_WEIGHTS: [u32; 9] = [3, 7, 6, 1, 8, 9, 4, 5, 2];
const CHECK2_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// D-numbers add this to the day of birth
const D_NUMBER_OFFSET: u32 = 40;

/// Legal sex as encoded in the individual number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "Mann")]
    Male,
    #[serde(rename = "Kvinne")]
    Female,
}

impl Sex {
    /// Norwegian label, as shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Mann",
            Sex::Female => "Kvinne",
        }
    }
}

/// Why an identity number was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IdentityError {
    #[error("Identity number must have {expected} digits, got {actual}")]
    WrongLength { actual: usize, expected: usize },

    #[error("Identity number may only contain digits")]
    NonDigit,

    #[error("Invalid month {month} in identity number")]
    InvalidMonth { month: u32 },

    #[error("Invalid day {day} for month {month} in identity number")]
    InvalidDay { day: u32, month: u32 },

    #[error("First check digit is {actual}, expected {expected}")]
    FirstCheckDigit { expected: u32, actual: u32 },

    #[error("Second check digit is {actual}, expected {expected}")]
    SecondCheckDigit { expected: u32, actual: u32 },
}

/// Outcome of validating an identity number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityValidationResult {
    pub valid: bool,
    pub is_d_number: bool,
    pub sex: Option<Sex>,
    pub birth_date: Option<NaiveDate>,
    pub error: Option<IdentityError>,
    /// Human-readable rejection reason
    pub reason: Option<String>,
    /// Human-readable summary of a valid number
    pub info: Option<String>,
}

impl IdentityValidationResult {
    fn empty() -> Self {
        Self {
            valid: true,
            is_d_number: false,
            sex: None,
            birth_date: None,
            error: None,
            reason: None,
            info: None,
        }
    }

    fn invalid(error: IdentityError) -> Self {
        Self {
            valid: false,
            reason: Some(error.to_string()),
            error: Some(error),
            ..Self::empty()
        }
    }

    /// True if the input was empty and nothing was asserted
    pub fn is_empty(&self) -> bool {
        self.valid && self.sex.is_none()
    }
}

/// Validator for fødselsnummer and D-nummer
pub struct IdentityValidator;

impl IdentityValidator {
    /// Validates an identity number and decodes it
    ///
    /// Never panics; every rejection is returned as an invalid result.
    pub fn validate(id: &str) -> IdentityValidationResult {
        let id = id.trim();
        if id.is_empty() {
            return IdentityValidationResult::empty();
        }

        match Self::decode(id) {
            Ok(decoded) => decoded,
            Err(error) => IdentityValidationResult::invalid(error),
        }
    }

    fn decode(id: &str) -> Result<IdentityValidationResult, IdentityError> {
        let length = id.chars().count();
        if length != ID_LENGTH {
            return Err(IdentityError::WrongLength {
                actual: length,
                expected: ID_LENGTH,
            });
        }

        let digits: Vec<u32> = id
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<u32>>>()
            .ok_or(IdentityError::NonDigit)?;

        let number = |from: usize, to: usize| digits[from..to].iter().fold(0, |acc, d| acc * 10 + d);
        let raw_day = number(0, 2);
        let month = number(2, 4);
        let year_in_century = number(4, 6);
        let individual = number(6, 9);

        let is_d_number = (41..=71).contains(&raw_day);
        let day = if is_d_number { raw_day - D_NUMBER_OFFSET } else { raw_day };

        if !(1..=12).contains(&month) {
            return Err(IdentityError::InvalidMonth { month });
        }
        let max_day = DAYS_IN_MONTH[(month - 1) as usize];
        if !(1..=max_day).contains(&day) {
            return Err(IdentityError::InvalidDay { day, month });
        }

        let check1 = check_digit(&digits[..9], &CHECK1_WEIGHTS);
        if check1 != digits[9] {
            return Err(IdentityError::FirstCheckDigit {
                expected: check1,
                actual: digits[9],
            });
        }
        let check2 = check_digit(&digits[..10], &CHECK2_WEIGHTS);
        if check2 != digits[10] {
            return Err(IdentityError::SecondCheckDigit {
                expected: check2,
                actual: digits[10],
            });
        }

        let sex = if individual % 2 == 0 { Sex::Female } else { Sex::Male };
        let year = birth_year(individual, year_in_century);
        let birth_date = NaiveDate::from_ymd_opt(year, month, day);

        let kind = if is_d_number { "D-nummer" } else { "Fødselsnummer" };
        let info = match birth_date {
            Some(date) => format!("{}, {}, født {}", kind, sex.label(), date.format("%d.%m.%Y")),
            None => format!(
                "{}, {}, født {:02}.{:02}.{} (ikke en gyldig kalenderdato)",
                kind,
                sex.label(),
                day,
                month,
                year
            ),
        };

        Ok(IdentityValidationResult {
            valid: true,
            is_d_number,
            sex: Some(sex),
            birth_date,
            error: None,
            reason: None,
            info: Some(info),
        })
    }
}

/// Modulus-11 check digit, where a result of 11 maps to 0
///
/// A result of 10 cannot match any digit and so always fails comparison.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match 11 - sum % 11 {
        11 => 0,
        k => k,
    }
}

/// Resolves the four-digit birth year from the individual number
fn birth_year(individual: u32, year_in_century: u32) -> i32 {
    let century = if individual >= 500 && year_in_century <= 39 { 2000 } else { 1900 };
    century + year_in_century as i32
}
