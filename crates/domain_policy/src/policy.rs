//! Active policy rows
//!
//! The policy system exports one row per coverage (`forsikring`), so a policy
//! with three coverages appears three times with the same `polisenummer`.
//! Rows are read-only input; nothing in the workspace mutates them.

use serde::{Deserialize, Serialize};

use core_kernel::loose::{self, LooseAmount};
use core_kernel::{Money, PolicyNumber, ProductCode};

use crate::status::PolicyStatus;

/// One coverage row from `aktivePolicies`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivePolicy {
    #[serde(default, rename = "polisenummer", deserialize_with = "loose::text")]
    pub policy_number: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub status: Option<String>,
    /// Annualized premium for this coverage
    #[serde(default, rename = "årspremie", alias = "arspremie")]
    pub annual_premium: LooseAmount,
    #[serde(default, rename = "produktkode", deserialize_with = "loose::text")]
    pub product_code: Option<String>,
    #[serde(default, rename = "produktnavn", deserialize_with = "loose::text")]
    pub product_name: Option<String>,
    #[serde(default, rename = "forsikringId", deserialize_with = "loose::text")]
    pub coverage_id: Option<String>,
}

impl ActivePolicy {
    pub fn policy_status(&self) -> PolicyStatus {
        PolicyStatus::parse(self.status.as_deref())
    }

    /// True if the row takes part in metrics
    pub fn is_active(&self) -> bool {
        self.policy_status().is_active()
    }

    pub fn policy_number(&self) -> Option<PolicyNumber> {
        self.policy_number.as_deref().map(PolicyNumber::new)
    }

    pub fn product(&self) -> Option<ProductCode> {
        self.product_code.as_deref().map(ProductCode::new)
    }

    /// Annual premium in NOK
    ///
    /// A malformed premium counts as zero; see [`crate::premium_warnings`].
    pub fn premium(&self) -> Money {
        Money::nok(self.annual_premium.or_zero())
    }
}

/// Keeps only the rows that take part in metrics
pub fn active_rows(policies: &[ActivePolicy]) -> impl Iterator<Item = &ActivePolicy> {
    policies.iter().filter(|p| p.is_active())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_coverage_row() {
        let json = r#"{
            "polisenummer": 8812345,
            "status": "Aktiv",
            "årspremie": "12 400,00",
            "produktkode": "BIL",
            "produktnavn": "Bil Kasko",
            "forsikringId": "F-1"
        }"#;
        let row: ActivePolicy = serde_json::from_str(json).unwrap();

        assert_eq!(row.policy_number(), Some(PolicyNumber::new("8812345")));
        assert_eq!(row.product(), Some(ProductCode::new("BIL")));
        assert_eq!(row.premium(), Money::nok(dec!(12400)));
        assert!(row.is_active());
    }

    #[test]
    fn test_missing_fields_default() {
        let row: ActivePolicy = serde_json::from_str("{}").unwrap();
        assert!(row.is_active());
        assert!(row.premium().is_zero());
        assert_eq!(row.policy_number(), None);
    }

    #[test]
    fn test_malformed_premium_is_zero() {
        let row: ActivePolicy = serde_json::from_str(r#"{"årspremie": "ca. 5000"}"#).unwrap();
        assert!(row.premium().is_zero());
    }

    #[test]
    fn test_active_rows_filters_status() {
        let rows = vec![
            ActivePolicy { status: Some("Aktiv".into()), ..Default::default() },
            ActivePolicy { status: Some("Kansellert".into()), ..Default::default() },
            ActivePolicy::default(),
        ];
        assert_eq!(active_rows(&rows).count(), 2);
    }
}
