//! Claim normalization
//!
//! Turns the raw `skadehistorikk` rows into canonical [`Claim`] values:
//! dates parsed, costs reconciled, duplicates collapsed, a stable order.
//!
//! # Cost reconciliation
//!
//! ```text
//! computed = paid + reserved
//! gross    = totalKostnad if supplied, otherwise computed
//! net      = gross + recovery
//! ```
//!
//! A supplied total that differs from `computed` by more than
//! [`COST_TOLERANCE`] is still used, and a [`NormalizationWarning::CostMismatch`]
//! is recorded.
//!
//! # Raw input only
//!
//! The normalizer reads raw records. Canonical claims cannot be fed back in:
//!
//! ```compile_fail
//! use domain_claims::{ClaimNormalizer, RawClaim};
//!
//! let normalizer = ClaimNormalizer::new();
//! let first = normalizer.normalize(&[RawClaim::default()]);
//! let _second = normalizer.normalize(&first.claims);
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

use core_kernel::{parse_national_date, ClaimNumber, LooseAmount, Money, ProductCode};

use crate::claim::{Claim, ClaimClassification, CostSource};
use crate::raw::{RawClaim, RawEconomy};
use crate::warning::{AmountField, DateField, NormalizationWarning, WarningSink};

/// Largest difference between the authoritative total and paid + reserved
/// that is treated as rounding
pub const COST_TOLERANCE: Decimal = dec!(1);

/// Normalized claims together with everything that was degraded on the way
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedClaims {
    pub claims: Vec<Claim>,
    pub warnings: Vec<NormalizationWarning>,
}

/// Normalizes raw claim records
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimNormalizer;

impl ClaimNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes raw claims
    ///
    /// Claims are ordered by incident date, newest first, with undated claims
    /// last; ties are broken by claim number so the order is stable.
    pub fn normalize(&self, raw_claims: &[RawClaim]) -> NormalizedClaims {
        let mut seen: HashSet<ClaimNumber> = HashSet::new();
        let mut claims = Vec::with_capacity(raw_claims.len());
        let mut warnings = Vec::new();

        for (index, raw) in raw_claims.iter().enumerate() {
            let position = index + 1;
            let (claim, claim_warnings) = normalize_one(raw, position);

            let has_real_id = raw.claim_number.is_some();
            if has_real_id && !seen.insert(claim.claim_id.clone()) {
                warnings.push(NormalizationWarning::DuplicateClaim {
                    claim_id: claim.claim_id.clone(),
                    dropped_net_cost: claim.net_cost,
                });
                continue;
            }

            warnings.extend(claim_warnings);
            claims.push(claim);
        }

        claims.sort_by(compare_for_display);

        NormalizedClaims { claims, warnings }
    }

    /// Normalizes raw claims and reports every warning to `sink`
    pub fn normalize_with_sink(
        &self,
        raw_claims: &[RawClaim],
        sink: &dyn WarningSink,
    ) -> NormalizedClaims {
        let normalized = self.normalize(raw_claims);
        for warning in &normalized.warnings {
            sink.record(warning);
        }
        normalized
    }
}

fn normalize_one(raw: &RawClaim, position: usize) -> (Claim, Vec<NormalizationWarning>) {
    let mut warnings = Vec::new();

    let claim_id = match raw.claim_number.as_deref() {
        Some(number) => ClaimNumber::new(number),
        None => {
            let assigned = ClaimNumber::new(format!("UKJENT-{}", position));
            warnings.push(NormalizationWarning::MissingClaimId {
                position,
                assigned: assigned.clone(),
            });
            assigned
        }
    };

    let mut date = |field: DateField, value: Option<&str>| -> Option<NaiveDate> {
        let raw_date = value?;
        match parse_national_date(raw_date) {
            Ok(date) => Some(date),
            Err(_) => {
                warnings.push(NormalizationWarning::UnparseableDate {
                    claim_id: claim_id.clone(),
                    field,
                    raw: raw_date.to_string(),
                });
                None
            }
        }
    };

    let incident_date = date(DateField::Incident, raw.incident_date.as_deref());
    let reported_date = date(DateField::Reported, raw.reported_date.as_deref());
    let closed_date = date(DateField::Closed, raw.closed_date.as_deref());

    let empty_economy = RawEconomy::default();
    let economy = raw.economy.as_ref().unwrap_or(&empty_economy);

    let mut amount = |field: AmountField, value: &LooseAmount| -> Money {
        check_amount(&claim_id, field, value, &mut warnings);
        Money::nok(value.or_zero())
    };

    let paid_amount = amount(AmountField::Paid, &economy.paid);
    let reserved_amount = amount(AmountField::Reserved, &economy.reserved);
    let recovery_amount = amount(AmountField::Recovery, &economy.recovery);
    check_amount(&claim_id, AmountField::TotalCost, &economy.total_cost, &mut warnings);

    let computed = paid_amount + reserved_amount;
    let (gross_cost, cost_source) = match economy.total_cost.value() {
        Some(total) => {
            let authoritative = Money::nok(total);
            if (authoritative.amount() - computed.amount()).abs() > COST_TOLERANCE {
                warnings.push(NormalizationWarning::CostMismatch {
                    claim_id: claim_id.clone(),
                    expected: authoritative,
                    actual: computed,
                });
            }
            (authoritative, CostSource::Authoritative)
        }
        None => (computed, CostSource::Computed),
    };
    let net_cost = gross_cost + recovery_amount;

    let classification = raw
        .damage_codes
        .as_ref()
        .map(|codes| ClaimClassification {
            level1: codes.level1.clone(),
            level2: codes.level2.clone(),
            level3: codes.level3.clone(),
        })
        .unwrap_or_default();

    let claim = Claim {
        claim_id,
        incident_date,
        reported_date,
        closed_date,
        is_open: raw.open.unwrap_or(closed_date.is_none()),
        product_code: raw.product_code.as_deref().map(ProductCode::new),
        product_name: raw.product_name.clone(),
        paid_amount,
        reserved_amount,
        recovery_amount,
        gross_cost,
        cost_source,
        net_cost,
        classification,
        vehicle_registration: raw.registration_number.clone(),
        case_handler: raw.case_handler.clone(),
    };

    (claim, warnings)
}

/// Records a `MalformedAmount` warning if `value` was supplied but is not a number
fn check_amount(
    claim_id: &ClaimNumber,
    field: AmountField,
    value: &LooseAmount,
    warnings: &mut Vec<NormalizationWarning>,
) {
    if let Some(text) = value.malformed() {
        warnings.push(NormalizationWarning::MalformedAmount {
            claim_id: claim_id.clone(),
            field,
            raw: text.to_string(),
        });
    }
}

fn compare_for_display(a: &Claim, b: &Claim) -> Ordering {
    let by_date = match (a.incident_date, b.incident_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| a.claim_id.cmp(&b.claim_id))
}
