//! Pre-built Test Fixtures
//!
//! Ready-to-use test data. Values are fixed so that expected figures can be
//! worked out by hand.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_analytics::{CustomerSnapshot, RiskThresholds};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical car policy premium
    pub fn car_premium() -> Money {
        Money::nok(dec!(12000))
    }

    /// A typical home policy premium
    pub fn home_premium() -> Money {
        Money::nok(dec!(6000))
    }

    /// A large commercial premium, easy to pro-rate
    pub fn commercial_premium() -> Money {
        Money::nok(dec!(1200000))
    }
}

/// Fixture for reference dates
pub struct DateFixtures;

impl DateFixtures {
    /// Mid-August, 8/12 of the year elapsed
    pub fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
    }

    /// Leap day, for trailing-window edge cases
    pub fn leap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn new_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }
}

/// Fixture for Norwegian identity numbers
pub struct IdentityFixtures;

impl IdentityFixtures {
    /// Fødselsnummer, Mann, 01.12.1999
    pub fn male() -> &'static str {
        "01129955151"
    }

    /// Fødselsnummer, Kvinne, 01.12.1999
    pub fn female() -> &'static str {
        "01129955232"
    }

    /// D-nummer, Mann, 11.12.1999
    pub fn d_number() -> &'static str {
        "51129955116"
    }

    /// Kvinne, 01.01.2000
    pub fn born_2000() -> &'static str {
        "01010050053"
    }

    /// All valid numbers above
    pub fn all_valid() -> [&'static str; 4] {
        [Self::male(), Self::female(), Self::d_number(), Self::born_2000()]
    }
}

/// Fixture for classification thresholds
pub struct ThresholdFixtures;

impl ThresholdFixtures {
    /// The thresholds the brokerage uses
    pub fn standard() -> RiskThresholds {
        RiskThresholds {
            loss_ratio_high: dec!(70),
            loss_ratio_moderate: dec!(30),
            frequency_high: dec!(10),
            frequency_moderate: dec!(5),
        }
    }
}

/// A complete customer payload
///
/// As of [`DateFixtures::reference_date`]:
/// - two active policies (`P-100` with two coverages, `P-200`), one cancelled
/// - closed years 2023 and 2024 from `årsdata`, plus an empty 2022 and a
///   stale 2025 row that must be ignored
/// - four claims, one of them a duplicate and one undated
pub const SAMPLE_SNAPSHOT: &str = r#"{
    "kundeInfo": {
        "kundenummer": "K-10001",
        "navn": "Kari Nordmann",
        "fødselsnummer": "01129955232",
        "epost": "kari@example.no",
        "telefon": "+47 900 00 000"
    },
    "aktivePolicies": [
        {"polisenummer": "P-100", "status": "Aktiv", "årspremie": 9000, "produktkode": "BIL", "produktnavn": "Bil Kasko", "forsikringId": "F-1"},
        {"polisenummer": "P-100", "status": "Aktiv", "årspremie": "3 000,00", "produktkode": "BIL", "produktnavn": "Bil Kasko", "forsikringId": "F-2"},
        {"polisenummer": "P-200", "status": "Aktiv", "årspremie": 6000, "produktkode": "HUS", "produktnavn": "Husforsikring"},
        {"polisenummer": "P-300", "status": "Kansellert", "årspremie": 4000, "produktkode": "REISE"}
    ],
    "skadehistorikk": [
        {
            "skadenummer": "S-2025-1",
            "skadedato": "10-03-2025",
            "åpen": "J",
            "produktkode": "BIL",
            "økonomi": {"utbetalt": 4000, "reservert": 2000, "regress": -1000},
            "skadekoder": {"nivå1": "Kjøretøy", "nivå2": "Kollisjon"}
        },
        {
            "skadenummer": "S-2024-7",
            "skadedato": "20-11-2024",
            "åpen": false,
            "produktkode": "HUS",
            "økonomi": {"utbetalt": 8000, "totalKostnad": 8000},
            "skadekoder": {"nivå1": "Bygning"}
        },
        {
            "skadenummer": "S-2025-1",
            "skadedato": "10-03-2025",
            "økonomi": {"utbetalt": 4000}
        },
        {
            "skadenummer": "S-0000-1",
            "skadedato": "ukjent",
            "produktkode": "REISE",
            "økonomi": {"utbetalt": 500}
        }
    ],
    "årsdata": [
        {"år": 2022, "premie": 0, "skadekostnad": 0, "antallSkader": 0},
        {"år": 2023, "premie": 16000, "skadekostnad": 2000, "antallSkader": 1, "antallÅpneSkader": 0, "antallProdukter": 2},
        {"år": 2024, "premie": 18000, "skadekostnad": 8000, "antallSkader": 1, "antallÅpneSkader": 0, "antallProdukter": 2},
        {"år": 2025, "premie": 99999, "skadekostnad": 99999, "antallSkader": 42}
    ]
}"#;

/// Fixture for whole snapshots
pub struct SnapshotFixtures;

impl SnapshotFixtures {
    /// [`SAMPLE_SNAPSHOT`] parsed
    pub fn sample() -> CustomerSnapshot {
        serde_json::from_str(SAMPLE_SNAPSHOT).expect("sample snapshot parses")
    }

    /// A customer with nothing but master data
    pub fn empty() -> CustomerSnapshot {
        serde_json::from_str(r#"{"kundeInfo": {"kundenummer": "K-0", "navn": "Ola Nordmann"}}"#)
            .expect("empty snapshot parses")
    }
}
