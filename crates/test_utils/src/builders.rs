//! Test Data Builders
//!
//! Builders for the raw payload rows. Tests specify only the fields they care
//! about; everything else is left the way an upstream system would leave it.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::LooseAmount;
use domain_analytics::{CustomerSnapshot, YearAggregate};
use domain_claims::{RawClaim, RawDamageCodes, RawEconomy};
use domain_party::CustomerInfo;
use domain_policy::ActivePolicy;

/// Formats a date the way the claims system does (`DD-MM-YYYY`)
pub fn national_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Builder for raw claim rows
#[derive(Debug, Clone, Default)]
pub struct RawClaimBuilder {
    raw: RawClaim,
}

impl RawClaimBuilder {
    /// Creates a claim with the given claim number and nothing else
    pub fn new(claim_number: impl Into<String>) -> Self {
        Self {
            raw: RawClaim {
                claim_number: Some(claim_number.into()),
                ..Default::default()
            },
        }
    }

    /// Creates a claim without claim number
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn incident_date(mut self, date: NaiveDate) -> Self {
        self.raw.incident_date = Some(national_date(date));
        self
    }

    /// Sets the incident date text verbatim
    pub fn incident_date_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw.incident_date = Some(raw.into());
        self
    }

    pub fn closed_date(mut self, date: NaiveDate) -> Self {
        self.raw.closed_date = Some(national_date(date));
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.raw.open = Some(open);
        self
    }

    pub fn product(mut self, code: impl Into<String>) -> Self {
        self.raw.product_code = Some(code.into());
        self
    }

    pub fn paid(mut self, amount: Decimal) -> Self {
        self.economy().paid = amount.into();
        self
    }

    pub fn reserved(mut self, amount: Decimal) -> Self {
        self.economy().reserved = amount.into();
        self
    }

    /// Signed recovery; pass a negative amount for money recovered
    pub fn recovery(mut self, amount: Decimal) -> Self {
        self.economy().recovery = amount.into();
        self
    }

    pub fn total_cost(mut self, amount: Decimal) -> Self {
        self.economy().total_cost = amount.into();
        self
    }

    /// Sets the paid amount to unparseable text
    pub fn malformed_paid(mut self, raw: impl Into<String>) -> Self {
        self.economy().paid = LooseAmount::Malformed(raw.into());
        self
    }

    pub fn category(mut self, level1: impl Into<String>) -> Self {
        self.raw.damage_codes = Some(RawDamageCodes {
            level1: Some(level1.into()),
            ..Default::default()
        });
        self
    }

    fn economy(&mut self) -> &mut RawEconomy {
        self.raw.economy.get_or_insert_with(RawEconomy::default)
    }

    pub fn build(self) -> RawClaim {
        self.raw
    }
}

/// Builder for active policy rows
#[derive(Debug, Clone, Default)]
pub struct ActivePolicyBuilder {
    row: ActivePolicy,
}

impl ActivePolicyBuilder {
    /// An active coverage row on `policy_number`
    pub fn new(policy_number: impl Into<String>) -> Self {
        Self {
            row: ActivePolicy {
                policy_number: Some(policy_number.into()),
                status: Some("Aktiv".to_string()),
                ..Default::default()
            },
        }
    }

    pub fn product(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.row.product_code = Some(code.into());
        self.row.product_name = Some(name.into());
        self
    }

    pub fn annual_premium(mut self, amount: Decimal) -> Self {
        self.row.annual_premium = amount.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.row.status = Some(status.into());
        self
    }

    pub fn coverage_id(mut self, id: impl Into<String>) -> Self {
        self.row.coverage_id = Some(id.into());
        self
    }

    pub fn build(self) -> ActivePolicy {
        self.row
    }
}

/// Builder for closed-year aggregates
#[derive(Debug, Clone, Default)]
pub struct YearAggregateBuilder {
    aggregate: YearAggregate,
}

impl YearAggregateBuilder {
    pub fn new(year: u32) -> Self {
        Self {
            aggregate: YearAggregate {
                year,
                ..Default::default()
            },
        }
    }

    pub fn premium(mut self, amount: Decimal) -> Self {
        self.aggregate.premium = amount.into();
        self
    }

    pub fn claim_cost(mut self, amount: Decimal) -> Self {
        self.aggregate.claim_cost = amount.into();
        self
    }

    pub fn claims(mut self, count: u32, open: u32) -> Self {
        self.aggregate.claim_count = count;
        self.aggregate.open_claim_count = open;
        self
    }

    pub fn products(mut self, count: u32) -> Self {
        self.aggregate.product_count = count;
        self
    }

    pub fn build(self) -> YearAggregate {
        self.aggregate
    }
}

/// Builder for whole snapshots
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: CustomerSnapshot,
}

impl SnapshotBuilder {
    pub fn new(customer_number: impl Into<String>) -> Self {
        Self {
            snapshot: CustomerSnapshot {
                customer: CustomerInfo {
                    customer_number: Some(customer_number.into()),
                    name: Some("Test Kunde".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    pub fn national_id(mut self, id: impl Into<String>) -> Self {
        self.snapshot.customer.national_id = Some(id.into());
        self
    }

    pub fn policy(mut self, row: ActivePolicy) -> Self {
        self.snapshot.active_policies.push(row);
        self
    }

    pub fn claim(mut self, raw: RawClaim) -> Self {
        self.snapshot.claim_history.push(raw);
        self
    }

    pub fn year(mut self, aggregate: YearAggregate) -> Self {
        self.snapshot.yearly_aggregates.push(aggregate);
        self
    }

    pub fn build(self) -> CustomerSnapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_claim_builder_dates_use_national_format() {
        let raw = RawClaimBuilder::new("S-1")
            .incident_date(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap())
            .paid(dec!(100))
            .build();

        assert_eq!(raw.incident_date.as_deref(), Some("07-03-2025"));
        assert_eq!(raw.economy.unwrap().paid, LooseAmount::Amount(dec!(100)));
    }

    #[test]
    fn test_snapshot_builder() {
        let snapshot = SnapshotBuilder::new("K-1")
            .policy(ActivePolicyBuilder::new("P-1").annual_premium(dec!(5000)).build())
            .year(YearAggregateBuilder::new(2024).premium(dec!(5000)).build())
            .build();

        assert_eq!(snapshot.customer.customer_number.as_deref(), Some("K-1"));
        assert_eq!(snapshot.active_policies.len(), 1);
        assert_eq!(snapshot.yearly_aggregates[0].year, 2024);
    }
}
