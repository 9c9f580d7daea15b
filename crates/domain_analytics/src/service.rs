//! Analytics application service

use chrono::NaiveDate;
use std::sync::Arc;

use core_kernel::{CustomerNumber, HealthCheckResult};
use domain_claims::TracingWarningSink;

use crate::error::AnalyticsError;
use crate::ports::CustomerSnapshotPort;
use crate::risk::RiskThresholds;
use crate::snapshot::{analyze_with_sink, CustomerAnalytics, CustomerSnapshot};

/// Fetches a snapshot and derives the customer's analytics from it
///
/// The snapshot is fetched once and every figure is derived from that one
/// copy. A failed fetch is returned as an error; there is no partial result.
pub struct AnalyticsService {
    port: Arc<dyn CustomerSnapshotPort>,
    thresholds: RiskThresholds,
}

impl AnalyticsService {
    pub fn new(port: Arc<dyn CustomerSnapshotPort>, thresholds: RiskThresholds) -> Self {
        Self { port, thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Analytics for a stored customer as of `now`
    pub async fn customer_analytics(
        &self,
        customer: &CustomerNumber,
        now: NaiveDate,
    ) -> Result<CustomerAnalytics, AnalyticsError> {
        if customer.is_empty() {
            return Err(AnalyticsError::InvalidCustomerNumber(customer.to_string()));
        }

        let snapshot = self
            .port
            .fetch_snapshot(customer)
            .await
            .map_err(|e| AnalyticsError::fetch(customer.as_str(), e))?;

        tracing::info!(
            customer = %customer,
            claims = snapshot.claim_history.len(),
            policies = snapshot.active_policies.len(),
            "snapshot fetched"
        );

        Ok(self.analyze_snapshot(&snapshot, now))
    }

    /// Analytics for a snapshot supplied by the caller
    pub fn analyze_snapshot(&self, snapshot: &CustomerSnapshot, now: NaiveDate) -> CustomerAnalytics {
        if let Err(error) = snapshot.customer.check() {
            tracing::warn!(%error, "customer master data has problems");
        }

        let analytics = analyze_with_sink(snapshot, now, &self.thresholds, &TracingWarningSink);
        for warning in &analytics.policy_warnings {
            tracing::warn!("{}", warning);
        }
        tracing::debug!(
            tier = %analytics.risk.tier,
            warnings = analytics.warnings.len(),
            "analytics derived"
        );
        analytics
    }

    pub async fn health(&self) -> HealthCheckResult {
        self.port.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockSnapshotPort;
    use crate::risk::RiskTier;
    use core_kernel::AdapterHealth;
    use rust_decimal_macros::dec;

    fn thresholds() -> RiskThresholds {
        RiskThresholds {
            loss_ratio_high: dec!(70),
            loss_ratio_moderate: dec!(30),
            frequency_high: dec!(10),
            frequency_moderate: dec!(5),
        }
    }

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
    }

    fn snapshot() -> CustomerSnapshot {
        CustomerSnapshot {
            yearly_aggregates: vec![crate::timeseries::YearAggregate {
                year: 2024,
                premium: dec!(10000).into(),
                claim_cost: dec!(9000).into(),
                claim_count: 2,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_customer_analytics_from_port() {
        let customer = CustomerNumber::new("K-1");
        let port = MockSnapshotPort::with_snapshots(vec![(customer.clone(), snapshot())]).await;
        let service = AnalyticsService::new(Arc::new(port), thresholds());

        let analytics = service.customer_analytics(&customer, now()).await.unwrap();

        assert_eq!(analytics.as_of, now());
        assert_eq!(analytics.metrics.historical.loss_ratio_percent, dec!(90));
        assert_eq!(analytics.risk.tier, RiskTier::High);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_terminal() {
        let port = MockSnapshotPort::new();
        port.set_unavailable(true);
        let service = AnalyticsService::new(Arc::new(port), thresholds());

        let error = service
            .customer_analytics(&CustomerNumber::new("K-1"), now())
            .await
            .unwrap_err();

        assert!(matches!(error, AnalyticsError::Fetch { .. }));
        assert!(!error.is_not_found());
        assert_eq!(service.health().await.status, AdapterHealth::Unhealthy);
    }

    #[tokio::test]
    async fn test_unknown_customer_is_not_found() {
        let service = AnalyticsService::new(Arc::new(MockSnapshotPort::new()), thresholds());
        let error = service
            .customer_analytics(&CustomerNumber::new("K-404"), now())
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_blank_customer_number_is_rejected() {
        let service = AnalyticsService::new(Arc::new(MockSnapshotPort::new()), thresholds());
        let error = service
            .customer_analytics(&CustomerNumber::new("  "), now())
            .await
            .unwrap_err();
        assert!(matches!(error, AnalyticsError::InvalidCustomerNumber(_)));
    }
}
