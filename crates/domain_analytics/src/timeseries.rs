//! Year-by-year series
//!
//! Closed years come from the yearly aggregates (`årsdata`) the data
//! warehouse produces. The running year is never taken from there: the
//! warehouse only refreshes closed years, so its current-year figures are
//! stale. The current year is rebuilt from the claims and the active
//! policies instead.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use core_kernel::loose::{self, LooseAmount};
use core_kernel::{months_elapsed, Money};
use domain_claims::Claim;
use domain_policy::{active_products, ActivePolicy, PortfolioSummary};

use crate::metrics::{loss_ratio_percent, tally};

/// One closed year from `årsdata`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearAggregate {
    #[serde(default, rename = "år", alias = "ar", deserialize_with = "loose::count")]
    pub year: u32,
    #[serde(default, rename = "premie")]
    pub premium: LooseAmount,
    #[serde(default, rename = "skadekostnad")]
    pub claim_cost: LooseAmount,
    #[serde(default, rename = "antallSkader", deserialize_with = "loose::count")]
    pub claim_count: u32,
    #[serde(default, rename = "antallÅpneSkader", alias = "antallApneSkader", deserialize_with = "loose::count")]
    pub open_claim_count: u32,
    #[serde(default, rename = "antallProdukter", deserialize_with = "loose::count")]
    pub product_count: u32,
}

/// One row of the reconciled series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRow {
    pub year: i32,
    pub premium: Money,
    pub claim_cost: Money,
    pub loss_ratio_percent: Decimal,
    pub claim_count: u32,
    pub open_claim_count: u32,
    pub active_product_count: u32,
    /// True for the running year, whose premium is pro-rated
    pub is_estimated: bool,
}

impl YearRow {
    fn closed(aggregate: &YearAggregate, year: i32) -> Self {
        let premium = Money::nok(amount(year, "premie", &aggregate.premium));
        let claim_cost = Money::nok(amount(year, "skadekostnad", &aggregate.claim_cost));

        Self {
            year,
            premium,
            claim_cost,
            loss_ratio_percent: loss_ratio_percent(claim_cost, premium),
            claim_count: aggregate.claim_count,
            open_claim_count: aggregate.open_claim_count,
            active_product_count: aggregate.product_count,
            is_estimated: false,
        }
    }

    /// True if the row carries no premium, cost, claims or products
    pub fn is_all_zero(&self) -> bool {
        self.premium.is_zero()
            && self.claim_cost.is_zero()
            && self.claim_count == 0
            && self.active_product_count == 0
    }
}

fn amount(year: i32, field: &str, value: &LooseAmount) -> Decimal {
    if let Some(raw) = value.malformed() {
        tracing::warn!(year, field, raw, "malformed yearly aggregate amount counted as zero");
    }
    value.or_zero()
}

/// Premium earned so far this year from an annualized premium
///
/// The running month counts as elapsed: 15 August is 8/12 of the year.
pub fn pro_rata_premium(annual: Money, now: NaiveDate) -> Money {
    let months = Decimal::from(months_elapsed(now));
    let amount = annual
        .amount()
        .checked_mul(months)
        .map(|total| total / dec!(12))
        .unwrap_or_else(|| annual.amount() / dec!(12) * months);
    Money::new(amount, annual.currency())
}

/// Builds the year series
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeSeriesReconciler;

impl TimeSeriesReconciler {
    pub fn new() -> Self {
        Self
    }

    /// Reconciles closed-year aggregates with the running year
    ///
    /// Rows are in ascending year order. Closed years with nothing in them
    /// are dropped; the running year is always present, even when empty.
    /// If `yearly_aggregates` lists a year twice the first entry is used.
    pub fn build_year_series(
        &self,
        yearly_aggregates: &[YearAggregate],
        claims: &[Claim],
        active_policies: &[ActivePolicy],
        now: NaiveDate,
    ) -> Vec<YearRow> {
        let current_year = now.year();
        let mut rows: BTreeMap<i32, YearRow> = BTreeMap::new();

        for aggregate in yearly_aggregates {
            let Ok(year) = i32::try_from(aggregate.year) else {
                continue;
            };
            if year == 0 {
                tracing::warn!("yearly aggregate without year ignored");
                continue;
            }
            if year > current_year {
                tracing::warn!(year, current_year, "yearly aggregate for a future year ignored");
                continue;
            }
            if year == current_year {
                tracing::debug!(year, "stale aggregate for the running year ignored");
                continue;
            }
            if rows.contains_key(&year) {
                tracing::debug!(year, "duplicate yearly aggregate ignored");
                continue;
            }

            rows.insert(year, YearRow::closed(aggregate, year));
        }

        // Dropped only after all aggregates are read, so a later duplicate
        // cannot take the place of an empty year
        rows.retain(|year, row| {
            let keep = !row.is_all_zero();
            if !keep {
                tracing::debug!(year, "empty closed year dropped");
            }
            keep
        });
        rows.insert(current_year, current_year_row(claims, active_policies, now));

        rows.into_values().collect()
    }
}

fn current_year_row(claims: &[Claim], active_policies: &[ActivePolicy], now: NaiveDate) -> YearRow {
    let year = now.year();
    let portfolio = PortfolioSummary::summarize(active_policies);
    let premium = pro_rata_premium(portfolio.total_premium, now);

    let (claim_count, open_claim_count, claim_cost) =
        tally(claims.iter().filter(|c| c.incident_year() == Some(year)));

    YearRow {
        year,
        premium,
        claim_cost,
        loss_ratio_percent: loss_ratio_percent(claim_cost, premium),
        claim_count,
        open_claim_count,
        active_product_count: u32::try_from(active_products(active_policies).len()).unwrap_or(u32::MAX),
        is_estimated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn aggregate(year: u32, premium: Decimal, cost: Decimal, claims: u32) -> YearAggregate {
        YearAggregate {
            year,
            premium: premium.into(),
            claim_cost: cost.into(),
            claim_count: claims,
            ..Default::default()
        }
    }

    #[test]
    fn test_pro_rata_premium() {
        let premium = pro_rata_premium(Money::nok(dec!(1200000)), date(2025, 8, 15));
        assert_eq!(premium, Money::nok(dec!(800000)));
    }

    #[test]
    fn test_pro_rata_premium_near_decimal_limit() {
        let annual = Money::nok(dec!(60000000000000000000000000000));
        let prorated = pro_rata_premium(annual, date(2025, 6, 30));
        assert_eq!(prorated.amount(), dec!(30000000000000000000000000000));
    }

    #[test]
    fn test_pro_rata_premium_in_january_and_december() {
        let annual = Money::nok(dec!(12000));
        assert_eq!(pro_rata_premium(annual, date(2025, 1, 1)), Money::nok(dec!(1000)));
        assert_eq!(pro_rata_premium(annual, date(2025, 12, 31)), annual);
    }

    #[test]
    fn test_aggregates_for_running_and_future_years_are_ignored() {
        let aggregates = vec![
            aggregate(2024, dec!(10000), dec!(2000), 1),
            aggregate(2025, dec!(99999), dec!(99999), 9),
            aggregate(2026, dec!(5000), dec!(0), 0),
        ];
        let series = TimeSeriesReconciler::new().build_year_series(&aggregates, &[], &[], date(2025, 8, 15));

        let years: Vec<i32> = series.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2024, 2025]);
        assert!(series[1].is_estimated);
        assert!(series[1].premium.is_zero());
        assert_eq!(series[1].claim_count, 0);
    }

    #[test]
    fn test_first_duplicate_year_wins() {
        let aggregates = vec![
            aggregate(2023, dec!(1000), dec!(100), 1),
            aggregate(2023, dec!(5000), dec!(500), 5),
        ];
        let series = TimeSeriesReconciler::new().build_year_series(&aggregates, &[], &[], date(2025, 3, 1));

        assert_eq!(series[0].premium, Money::nok(dec!(1000)));
        assert_eq!(series[0].loss_ratio_percent, dec!(10));
    }

    #[test]
    fn test_empty_closed_year_is_not_replaced_by_duplicate() {
        let aggregates = vec![
            aggregate(2022, dec!(0), dec!(0), 0),
            aggregate(2022, dec!(5000), dec!(500), 5),
        ];
        let series = TimeSeriesReconciler::new().build_year_series(&aggregates, &[], &[], date(2025, 3, 1));

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].year, 2025);
    }
}
