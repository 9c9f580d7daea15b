//! Normalization warnings
//!
//! Malformed or contradictory input never aborts normalization. Every
//! degradation is recorded as a warning so the caller can log it or show it
//! next to the figures it affects.

use serde::Serialize;
use std::fmt;

use core_kernel::{ClaimNumber, Money};

/// Date fields on a raw claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Incident,
    Reported,
    Closed,
}

/// Amount fields on a raw claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountField {
    Paid,
    Reserved,
    Recovery,
    TotalCost,
}

/// A non-fatal problem found while normalizing claims
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NormalizationWarning {
    /// Authoritative total differs from paid + reserved by more than the tolerance
    CostMismatch {
        claim_id: ClaimNumber,
        /// The authoritative `totalKostnad`, which is used
        expected: Money,
        /// Paid plus reserved
        actual: Money,
    },
    /// A date could not be parsed and was treated as unknown
    UnparseableDate {
        claim_id: ClaimNumber,
        field: DateField,
        raw: String,
    },
    /// An amount was present but not a number and was treated as zero
    MalformedAmount {
        claim_id: ClaimNumber,
        field: AmountField,
        raw: String,
    },
    /// A second record with an already seen claim number was dropped
    DuplicateClaim {
        claim_id: ClaimNumber,
        dropped_net_cost: Money,
    },
    /// A record without claim number was given a placeholder
    MissingClaimId {
        position: usize,
        assigned: ClaimNumber,
    },
}

impl NormalizationWarning {
    /// The claim the warning is about
    pub fn claim_id(&self) -> &ClaimNumber {
        match self {
            NormalizationWarning::CostMismatch { claim_id, .. }
            | NormalizationWarning::UnparseableDate { claim_id, .. }
            | NormalizationWarning::MalformedAmount { claim_id, .. }
            | NormalizationWarning::DuplicateClaim { claim_id, .. } => claim_id,
            NormalizationWarning::MissingClaimId { assigned, .. } => assigned,
        }
    }
}

impl fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationWarning::CostMismatch { claim_id, expected, actual } => write!(
                f,
                "claim {}: total cost {} differs from paid + reserved {}",
                claim_id, expected, actual
            ),
            NormalizationWarning::UnparseableDate { claim_id, field, raw } => write!(
                f,
                "claim {}: unparseable {:?} date '{}'",
                claim_id, field, raw
            ),
            NormalizationWarning::MalformedAmount { claim_id, field, raw } => write!(
                f,
                "claim {}: malformed {:?} amount '{}' counted as zero",
                claim_id, field, raw
            ),
            NormalizationWarning::DuplicateClaim { claim_id, dropped_net_cost } => write!(
                f,
                "claim {}: duplicate record dropped (net cost {})",
                claim_id, dropped_net_cost
            ),
            NormalizationWarning::MissingClaimId { position, assigned } => write!(
                f,
                "record #{} has no claim number, assigned {}",
                position, assigned
            ),
        }
    }
}

/// Receives warnings as they are produced
///
/// Normalization returns its warnings as data; a sink is only needed when
/// the caller wants them reported somewhere as well.
pub trait WarningSink {
    fn record(&self, warning: &NormalizationWarning);
}

/// Reports warnings through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingWarningSink;

impl WarningSink for TracingWarningSink {
    fn record(&self, warning: &NormalizationWarning) {
        tracing::warn!(claim_id = %warning.claim_id(), "{}", warning);
    }
}

/// Discards warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopWarningSink;

impl WarningSink for NoopWarningSink {
    fn record(&self, _warning: &NormalizationWarning) {}
}
