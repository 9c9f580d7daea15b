//! Property-Based Test Generators
//!
//! Proptest strategies for raw payload rows. Generated rows stay within what
//! upstream systems actually send, including the untidy parts: missing
//! fields, duplicate claim numbers and dates that do not parse.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_analytics::{CustomerSnapshot, YearAggregate};
use domain_claims::{RawClaim, RawEconomy};
use domain_party::CustomerInfo;
use domain_policy::ActivePolicy;

use crate::builders::national_date;

/// Strategy for kroner amounts with øre, zero to ten million
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|ore| Decimal::new(ore, 2))
}

/// Strategy for signed recovery amounts
pub fn recovery_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..1_000_000i64).prop_map(|ore| Decimal::new(ore, 2))
}

/// Strategy for dates between 2015 and 2026
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..(12 * 365)).prop_map(|days| {
        NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid date") + Duration::days(days)
    })
}

/// Strategy for reference dates in 2025
pub fn reference_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..365).prop_map(|days| {
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date") + Duration::days(days)
    })
}

/// Strategy for the incident date text, sometimes missing or unparseable
pub fn incident_date_text_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        8 => date_strategy().prop_map(|d| Some(national_date(d))),
        1 => Just(None),
        1 => Just(Some("ukjent".to_string())),
    ]
}

/// Strategy for product codes from a small fixed set
pub fn product_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BIL".to_string()),
        Just("HUS".to_string()),
        Just("INNBO".to_string()),
        Just("REISE".to_string()),
    ]
}

/// Strategy for raw claims
///
/// Claim numbers come from a small pool so duplicates occur.
pub fn raw_claim_strategy() -> impl Strategy<Value = RawClaim> {
    (
        proptest::option::weighted(0.95, 0u32..30),
        incident_date_text_strategy(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(product_code_strategy()),
        amount_strategy(),
        amount_strategy(),
        recovery_strategy(),
        proptest::option::weighted(0.3, amount_strategy()),
    )
        .prop_map(|(number, incident, open, product, paid, reserved, recovery, total)| RawClaim {
            claim_number: number.map(|n| format!("S-{}", n)),
            incident_date: incident,
            open,
            product_code: product,
            economy: Some(RawEconomy {
                paid: paid.into(),
                reserved: reserved.into(),
                recovery: recovery.into(),
                total_cost: total.map(Into::into).unwrap_or_default(),
            }),
            ..Default::default()
        })
}

/// Strategy for active policy rows
///
/// Policy numbers come from a small pool so one policy has several rows.
pub fn active_policy_strategy() -> impl Strategy<Value = ActivePolicy> {
    (
        0u32..8,
        prop_oneof![
            6 => Just(Some("Aktiv".to_string())),
            2 => Just(None),
            1 => Just(Some("Kansellert".to_string())),
        ],
        amount_strategy(),
        product_code_strategy(),
    )
        .prop_map(|(number, status, premium, product)| ActivePolicy {
            policy_number: Some(format!("P-{}", number)),
            status,
            annual_premium: premium.into(),
            product_code: Some(product),
            ..Default::default()
        })
}

/// Strategy for yearly aggregates in 2015 to 2026
pub fn year_aggregate_strategy() -> impl Strategy<Value = YearAggregate> {
    (2015u32..=2026, amount_strategy(), amount_strategy(), 0u32..20, 0u32..3)
        .prop_map(|(year, premium, cost, claims, open)| YearAggregate {
            year,
            premium: premium.into(),
            claim_cost: cost.into(),
            claim_count: claims,
            open_claim_count: open.min(claims),
            product_count: 2,
        })
}

/// Strategy for whole snapshots
pub fn snapshot_strategy() -> impl Strategy<Value = CustomerSnapshot> {
    (
        proptest::collection::vec(active_policy_strategy(), 0..8),
        proptest::collection::vec(raw_claim_strategy(), 0..25),
        proptest::collection::vec(year_aggregate_strategy(), 0..8),
    )
        .prop_map(|(active_policies, claim_history, yearly_aggregates)| CustomerSnapshot {
            customer: CustomerInfo {
                customer_number: Some("K-PROP".to_string()),
                ..Default::default()
            },
            active_policies,
            claim_history,
            yearly_aggregates,
        })
}
