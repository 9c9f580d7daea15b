//! Summary of the active portfolio

use serde::Serialize;
use std::collections::BTreeSet;

use core_kernel::{Money, PolicyNumber, ProductCode};

use crate::policy::{active_rows, ActivePolicy};

/// Counts and premium over the active coverage rows
///
/// `policy_count` counts distinct policy numbers; `coverage_count` counts
/// rows. Rows without policy number are coverage rows but not policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    pub policy_count: usize,
    pub coverage_count: usize,
    pub total_premium: Money,
    pub product_count: usize,
}

impl PortfolioSummary {
    /// Summarizes the active rows of `policies`
    pub fn summarize(policies: &[ActivePolicy]) -> Self {
        let mut policy_numbers: BTreeSet<PolicyNumber> = BTreeSet::new();
        let mut products: BTreeSet<ProductCode> = BTreeSet::new();
        let mut coverage_count = 0;
        let mut total_premium = Money::default();

        for row in active_rows(policies) {
            coverage_count += 1;
            total_premium = total_premium + row.premium();
            if let Some(number) = row.policy_number() {
                policy_numbers.insert(number);
            }
            if let Some(code) = row.product() {
                products.insert(code);
            }
        }

        Self {
            policy_count: policy_numbers.len(),
            coverage_count,
            total_premium,
            product_count: products.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.coverage_count == 0
    }
}

/// Distinct product codes among the active rows, in code order
pub fn active_products(policies: &[ActivePolicy]) -> BTreeSet<ProductCode> {
    active_rows(policies).filter_map(ActivePolicy::product).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(number: &str, product: &str, premium: rust_decimal::Decimal) -> ActivePolicy {
        ActivePolicy {
            policy_number: Some(number.to_string()),
            product_code: Some(product.to_string()),
            annual_premium: premium.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_policy_with_several_coverages_counts_once() {
        let rows = vec![
            row("P1", "BIL", dec!(8000)),
            row("P1", "BIL", dec!(2000)),
            row("P2", "HUS", dec!(5000)),
        ];
        let summary = PortfolioSummary::summarize(&rows);

        assert_eq!(summary.policy_count, 2);
        assert_eq!(summary.coverage_count, 3);
        assert_eq!(summary.product_count, 2);
        assert_eq!(summary.total_premium, Money::nok(dec!(15000)));
    }

    #[test]
    fn test_inactive_rows_are_ignored() {
        let mut cancelled = row("P3", "REISE", dec!(900));
        cancelled.status = Some("Kansellert".to_string());
        let summary = PortfolioSummary::summarize(&[row("P1", "BIL", dec!(100)), cancelled]);

        assert_eq!(summary.policy_count, 1);
        assert_eq!(summary.total_premium, Money::nok(dec!(100)));
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioSummary::summarize(&[]);
        assert!(summary.is_empty());
        assert!(summary.total_premium.is_zero());
    }
}
