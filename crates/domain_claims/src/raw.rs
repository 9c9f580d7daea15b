//! Raw claim records as delivered by the claims system
//!
//! This is the only shape in the workspace that mirrors the upstream export
//! (Norwegian keys, loosely typed values). The normalizer is the only reader.

use serde::{Deserialize, Serialize};

use core_kernel::loose::{self, LooseAmount};

/// One claim row from `skadehistorikk`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawClaim {
    #[serde(default, rename = "skadenummer", deserialize_with = "loose::text")]
    pub claim_number: Option<String>,
    /// Incident date, `DD-MM-YYYY`
    #[serde(default, rename = "skadedato", deserialize_with = "loose::text")]
    pub incident_date: Option<String>,
    #[serde(default, rename = "meldtDato", deserialize_with = "loose::text")]
    pub reported_date: Option<String>,
    #[serde(default, rename = "avsluttetDato", deserialize_with = "loose::text")]
    pub closed_date: Option<String>,
    #[serde(default, rename = "åpen", alias = "apen", deserialize_with = "loose::flag")]
    pub open: Option<bool>,
    #[serde(default, rename = "produktkode", deserialize_with = "loose::text")]
    pub product_code: Option<String>,
    #[serde(default, rename = "produktnavn", deserialize_with = "loose::text")]
    pub product_name: Option<String>,
    #[serde(default, rename = "økonomi", alias = "okonomi")]
    pub economy: Option<RawEconomy>,
    #[serde(default, rename = "skadekoder")]
    pub damage_codes: Option<RawDamageCodes>,
    #[serde(default, rename = "registreringsnummer", deserialize_with = "loose::text")]
    pub registration_number: Option<String>,
    #[serde(default, rename = "saksbehandler", deserialize_with = "loose::text")]
    pub case_handler: Option<String>,
}

/// The nested `økonomi` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEconomy {
    #[serde(default, rename = "utbetalt")]
    pub paid: LooseAmount,
    #[serde(default, rename = "reservert")]
    pub reserved: LooseAmount,
    /// Recovery from third parties; negative when money came back
    #[serde(default, rename = "regress")]
    pub recovery: LooseAmount,
    /// Authoritative total cost, when the claims system supplies one
    #[serde(default, rename = "totalKostnad")]
    pub total_cost: LooseAmount,
}

/// Three-level damage classification (`skadekoder`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDamageCodes {
    #[serde(default, rename = "nivå1", alias = "niva1", deserialize_with = "loose::text")]
    pub level1: Option<String>,
    #[serde(default, rename = "nivå2", alias = "niva2", deserialize_with = "loose::text")]
    pub level2: Option<String>,
    #[serde(default, rename = "nivå3", alias = "niva3", deserialize_with = "loose::text")]
    pub level3: Option<String>,
}
