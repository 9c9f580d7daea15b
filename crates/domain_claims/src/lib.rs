//! Claims Domain
//!
//! This crate turns the loosely typed claim history delivered by the claims
//! system into canonical [`Claim`] values with reconciled costs.
//!
//! # Pipeline
//!
//! ```text
//! RawClaim[] -> ClaimNormalizer -> NormalizedClaims { claims, warnings }
//! ```
//!
//! Downstream crates only ever see [`Claim`]; [`RawClaim`] stays here.

pub mod raw;
pub mod claim;
pub mod normalizer;
pub mod warning;

pub use raw::{RawClaim, RawEconomy, RawDamageCodes};
pub use claim::{Claim, ClaimClassification, CostSource};
pub use normalizer::{ClaimNormalizer, NormalizedClaims, COST_TOLERANCE};
pub use warning::{
    NormalizationWarning, DateField, AmountField,
    WarningSink, TracingWarningSink, NoopWarningSink,
};
