//! Canonical claim

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use core_kernel::{ClaimNumber, DateRange, Money, ProductCode};

/// Where a claim's gross cost came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostSource {
    /// The claims system supplied `totalKostnad`
    Authoritative,
    /// Paid plus reserved
    Computed,
}

/// Three-level damage classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClaimClassification {
    pub level1: Option<String>,
    pub level2: Option<String>,
    pub level3: Option<String>,
}

/// A normalized claim
///
/// Claims are only produced by [`crate::ClaimNormalizer`] and are read-only
/// afterwards. `net_cost` is the figure every downstream total sums;
/// `gross_cost` and its parts are kept for explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Claim {
    pub(crate) claim_id: ClaimNumber,
    pub(crate) incident_date: Option<NaiveDate>,
    pub(crate) reported_date: Option<NaiveDate>,
    pub(crate) closed_date: Option<NaiveDate>,
    pub(crate) is_open: bool,
    pub(crate) product_code: Option<ProductCode>,
    pub(crate) product_name: Option<String>,
    pub(crate) paid_amount: Money,
    pub(crate) reserved_amount: Money,
    pub(crate) recovery_amount: Money,
    pub(crate) gross_cost: Money,
    pub(crate) cost_source: CostSource,
    pub(crate) net_cost: Money,
    pub(crate) classification: ClaimClassification,
    pub(crate) vehicle_registration: Option<String>,
    pub(crate) case_handler: Option<String>,
}

impl Claim {
    pub fn claim_id(&self) -> &ClaimNumber {
        &self.claim_id
    }

    /// Incident date, `None` when the source date could not be parsed
    pub fn incident_date(&self) -> Option<NaiveDate> {
        self.incident_date
    }

    pub fn reported_date(&self) -> Option<NaiveDate> {
        self.reported_date
    }

    pub fn closed_date(&self) -> Option<NaiveDate> {
        self.closed_date
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn product_code(&self) -> Option<&ProductCode> {
        self.product_code.as_ref()
    }

    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    pub fn paid_amount(&self) -> Money {
        self.paid_amount
    }

    pub fn reserved_amount(&self) -> Money {
        self.reserved_amount
    }

    /// Signed recovery (regress); negative when money was recovered
    pub fn recovery_amount(&self) -> Money {
        self.recovery_amount
    }

    pub fn gross_cost(&self) -> Money {
        self.gross_cost
    }

    pub fn cost_source(&self) -> CostSource {
        self.cost_source
    }

    /// Gross cost plus recovery
    pub fn net_cost(&self) -> Money {
        self.net_cost
    }

    pub fn classification(&self) -> &ClaimClassification {
        &self.classification
    }

    pub fn vehicle_registration(&self) -> Option<&str> {
        self.vehicle_registration.as_deref()
    }

    pub fn case_handler(&self) -> Option<&str> {
        self.case_handler.as_deref()
    }

    /// Calendar year of the incident, if the date is known
    pub fn incident_year(&self) -> Option<i32> {
        self.incident_date.map(|d| d.year())
    }

    /// True if the incident date is known and falls inside `range`
    ///
    /// Undated claims are never inside any window.
    pub fn occurred_within(&self, range: &DateRange) -> bool {
        self.incident_date.is_some_and(|d| range.contains(d))
    }

    /// True if the claim is attributed to `code`
    pub fn matches_product(&self, code: &ProductCode) -> bool {
        self.product_code.as_ref() == Some(code)
    }
}
