//! Period metrics and the single loss-ratio formula
//!
//! Every figure shown as "skadeprosent" anywhere in the workspace comes from
//! [`loss_ratio_percent`]. The overview, the year series, the product table
//! and the risk classifier must agree, so no other module divides cost by
//! premium.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::{DateRange, Money, MoneyError};
use domain_claims::Claim;
use domain_policy::{ActivePolicy, PortfolioSummary};

use crate::timeseries::YearRow;

/// Loss ratio in percent, rounded to two decimals
///
/// Returns zero when the premium is not positive. A ratio too large to
/// represent saturates at `Decimal::MAX`.
pub fn loss_ratio_percent(cost: Money, premium: Money) -> Decimal {
    if !premium.is_positive() {
        return Decimal::ZERO;
    }
    match cost.ratio_to(&premium) {
        Ok(ratio) => ratio
            .checked_mul(dec!(100))
            .map_or(saturated(ratio), |percent| percent.round_dp(2)),
        Err(MoneyError::Overflow) => saturated(cost.amount()),
        Err(_) => Decimal::ZERO,
    }
}

fn saturated(sign_of: Decimal) -> Decimal {
    if sign_of.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Average number of claims per row of the year series
pub fn claims_per_year(series: &[YearRow]) -> Decimal {
    if series.is_empty() {
        return Decimal::ZERO;
    }
    let claims: u32 = series.iter().map(|row| row.claim_count).sum();
    (Decimal::from(claims) / Decimal::from(series.len() as u64)).round_dp(2)
}

/// Claim and premium figures for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodMetrics {
    pub claim_count: u32,
    pub open_claim_count: u32,
    /// Sum of net cost
    pub total_cost: Money,
    pub earned_premium: Money,
    pub loss_ratio_percent: Decimal,
}

impl PeriodMetrics {
    pub fn new(claim_count: u32, open_claim_count: u32, total_cost: Money, earned_premium: Money) -> Self {
        Self {
            claim_count,
            open_claim_count,
            total_cost,
            earned_premium,
            loss_ratio_percent: loss_ratio_percent(total_cost, earned_premium),
        }
    }

    /// Metrics for a set of claims against a premium
    pub fn from_claims<'a>(claims: impl IntoIterator<Item = &'a Claim>, earned_premium: Money) -> Self {
        let (count, open, cost) = tally(claims);
        Self::new(count, open, cost, earned_premium)
    }
}

/// Count, open count and summed net cost
pub(crate) fn tally<'a>(claims: impl IntoIterator<Item = &'a Claim>) -> (u32, u32, Money) {
    claims
        .into_iter()
        .fold((0, 0, Money::default()), |(count, open, cost), claim| {
            (
                count + 1,
                open + u32::from(claim.is_open()),
                cost + claim.net_cost(),
            )
        })
}

/// The metrics every consumer reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerMetrics {
    /// Trailing twelve months ending on the reference date
    pub current_12mo: PeriodMetrics,
    /// Whole history: the year series plus undated claims
    pub historical: PeriodMetrics,
    pub active: PortfolioSummary,
    /// The trailing window `current_12mo` covers
    pub window: DateRange,
}

/// Derives [`CustomerMetrics`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAggregator;

impl MetricsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregates claims and policies as of `now`
    ///
    /// The current window is `[now - 12 months, now]` on incident date.
    /// Its premium is the annualized premium of the active rows, not
    /// pro-rated. Historical figures are summed from `year_series` so that
    /// they match the series row for row; undated claims have no year and
    /// are added on top.
    pub fn aggregate(
        &self,
        claims: &[Claim],
        active_policies: &[ActivePolicy],
        year_series: &[YearRow],
        now: NaiveDate,
    ) -> CustomerMetrics {
        let active = PortfolioSummary::summarize(active_policies);
        let window = DateRange::trailing_year(now);

        let current_12mo = PeriodMetrics::from_claims(
            claims.iter().filter(|c| c.occurred_within(&window)),
            active.total_premium,
        );

        let (undated_count, undated_open, undated_cost) =
            tally(claims.iter().filter(|c| c.incident_date().is_none()));

        let historical = year_series.iter().fold(
            PeriodMetrics::new(undated_count, undated_open, undated_cost, Money::default()),
            |acc, row| {
                PeriodMetrics::new(
                    acc.claim_count + row.claim_count,
                    acc.open_claim_count + row.open_claim_count,
                    acc.total_cost + row.claim_cost,
                    acc.earned_premium + row.premium,
                )
            },
        );

        CustomerMetrics {
            current_12mo,
            historical,
            active,
            window,
        }
    }
}
