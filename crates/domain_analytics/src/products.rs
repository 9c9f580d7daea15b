//! Attribution of premium and claims to products
//!
//! The yearly aggregates carry premium per year but not per product, so
//! historical premium is split by the current product mix. That split is an
//! estimate and every row says so.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use core_kernel::{Money, PolicyNumber, ProductCode};
use domain_claims::Claim;
use domain_policy::{active_rows, ActivePolicy};

use crate::metrics::{loss_ratio_percent, tally, PeriodMetrics};

/// One product in the attribution table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub product_code: ProductCode,
    pub product_name: Option<String>,
    pub coverage_count: u32,
    pub policy_count: u32,
    pub annual_premium: Money,
    /// Fraction of the total annual premium, 0 to 1
    pub premium_share: Decimal,
    pub estimated_historical_premium: Money,
    pub is_estimate: bool,
    pub claim_count: u32,
    pub open_claim_count: u32,
    pub net_cost: Money,
    /// Net cost against the estimated historical premium
    pub loss_ratio_percent: Decimal,
}

/// Products plus the claims no active product accounts for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductAttribution {
    pub products: Vec<ProductRow>,
    pub unattributed_claim_count: u32,
    pub unattributed_cost: Money,
}

#[derive(Default)]
struct ProductGroup {
    name: Option<String>,
    coverage_count: u32,
    policies: Vec<PolicyNumber>,
    annual_premium: Money,
}

/// Splits metrics per product
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductAttributor;

impl ProductAttributor {
    pub fn new() -> Self {
        Self
    }

    /// Attributes premium and claims to the active products
    ///
    /// Claims are matched by exact product code. A claim whose product is
    /// not among the active ones is counted as unattributed and not spread
    /// over the other products.
    pub fn attribute_by_product(
        &self,
        active_policies: &[ActivePolicy],
        historical_totals: &PeriodMetrics,
        claims: &[Claim],
    ) -> ProductAttribution {
        let mut groups: BTreeMap<ProductCode, ProductGroup> = BTreeMap::new();
        let mut total_premium = Money::default();

        for row in active_rows(active_policies) {
            let premium = row.premium();
            total_premium = total_premium + premium;

            let Some(code) = row.product() else {
                continue;
            };
            let group = groups.entry(code).or_default();
            group.coverage_count += 1;
            group.annual_premium = group.annual_premium + premium;
            if group.name.is_none() {
                group.name = row.product_name.clone();
            }
            if let Some(number) = row.policy_number() {
                if !group.policies.contains(&number) {
                    group.policies.push(number);
                }
            }
        }

        let mut products: Vec<ProductRow> = groups
            .into_iter()
            .map(|(code, group)| {
                let premium_share = share(group.annual_premium, total_premium);
                let estimated = Money::new(
                    historical_totals.earned_premium.amount() * premium_share,
                    historical_totals.earned_premium.currency(),
                );
                let (claim_count, open_claim_count, net_cost) =
                    tally(claims.iter().filter(|c| c.matches_product(&code)));

                ProductRow {
                    product_name: group.name,
                    coverage_count: group.coverage_count,
                    policy_count: u32::try_from(group.policies.len()).unwrap_or(u32::MAX),
                    annual_premium: group.annual_premium,
                    premium_share,
                    estimated_historical_premium: estimated,
                    is_estimate: true,
                    claim_count,
                    open_claim_count,
                    net_cost,
                    loss_ratio_percent: loss_ratio_percent(net_cost, estimated),
                    product_code: code,
                }
            })
            .collect();

        products.sort_by(|a, b| {
            b.annual_premium
                .amount()
                .cmp(&a.annual_premium.amount())
                .then_with(|| a.product_code.cmp(&b.product_code))
        });

        let (unattributed_claim_count, _, unattributed_cost) = tally(claims.iter().filter(|c| {
            c.product_code()
                .map_or(true, |code| !products.iter().any(|p| &p.product_code == code))
        }));

        ProductAttribution {
            products,
            unattributed_claim_count,
            unattributed_cost,
        }
    }
}

fn share(part: Money, total: Money) -> Decimal {
    if !total.is_positive() {
        return Decimal::ZERO;
    }
    part.ratio_to(&total).map(|r| r.round_dp(4)).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_share_of_zero_total_is_zero() {
        assert_eq!(share(Money::nok(dec!(100)), Money::default()), Decimal::ZERO);
    }

    #[test]
    fn test_share_rounds_to_four_decimals() {
        assert_eq!(share(Money::nok(dec!(1)), Money::nok(dec!(3))), dec!(0.3333));
    }

    #[test]
    fn test_no_policies_leaves_every_claim_unattributed() {
        let historical = PeriodMetrics::new(0, 0, Money::default(), Money::default());
        let attribution = ProductAttributor::new().attribute_by_product(&[], &historical, &[]);
        assert!(attribution.products.is_empty());
        assert_eq!(attribution.unattributed_claim_count, 0);
    }
}
