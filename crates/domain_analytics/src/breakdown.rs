//! Claims grouped by damage classification

use serde::Serialize;
use std::collections::BTreeMap;

use core_kernel::Money;
use domain_claims::Claim;

/// Label for claims without a level-1 classification
pub const UNCLASSIFIED: &str = "Ukjent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub claim_count: u32,
    pub open_claim_count: u32,
    pub net_cost: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimBreakdown {
    /// Sorted by net cost, highest first, then by name
    pub categories: Vec<CategoryRow>,
    /// Reserved amount still held on open claims
    pub open_reserve: Money,
}

/// Groups claims by level-1 classification
pub fn breakdown_by_classification(claims: &[Claim]) -> ClaimBreakdown {
    let mut groups: BTreeMap<&str, CategoryRow> = BTreeMap::new();
    let mut open_reserve = Money::default();

    for claim in claims {
        let category = claim
            .classification()
            .level1
            .as_deref()
            .unwrap_or(UNCLASSIFIED);
        let row = groups.entry(category).or_insert_with(|| CategoryRow {
            category: category.to_string(),
            claim_count: 0,
            open_claim_count: 0,
            net_cost: Money::default(),
        });
        row.claim_count += 1;
        row.net_cost = row.net_cost + claim.net_cost();
        if claim.is_open() {
            row.open_claim_count += 1;
            open_reserve = open_reserve + claim.reserved_amount();
        }
    }

    let mut categories: Vec<CategoryRow> = groups.into_values().collect();
    categories.sort_by(|a, b| {
        b.net_cost
            .amount()
            .cmp(&a.net_cost.amount())
            .then_with(|| a.category.cmp(&b.category))
    });

    ClaimBreakdown {
        categories,
        open_reserve,
    }
}
