//! Input boundary for customer snapshots
//!
//! The engine never talks to the customer, policy or claims systems
//! directly. An adapter implementing [`CustomerSnapshotPort`] assembles the
//! snapshot; the engine only derives figures from it.
//!
//! ```rust,ignore
//! use domain_analytics::{AnalyticsService, CustomerSnapshotPort};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn CustomerSnapshotPort> = Arc::new(FileSnapshotAdapter::new(data_dir));
//! let service = AnalyticsService::new(port, thresholds);
//! ```

use async_trait::async_trait;

use core_kernel::{CustomerNumber, DomainPort, HealthCheckable, PortError};

use crate::snapshot::CustomerSnapshot;

/// Source of customer snapshots
#[async_trait]
pub trait CustomerSnapshotPort: DomainPort + HealthCheckable {
    /// Fetches the current snapshot for a customer
    ///
    /// # Errors
    ///
    /// `PortError::NotFound` if the customer is unknown; any other variant
    /// if the source could not be read.
    async fn fetch_snapshot(&self, customer: &CustomerNumber) -> Result<CustomerSnapshot, PortError>;
}

/// In-memory snapshot port for tests
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    #[derive(Debug, Default)]
    pub struct MockSnapshotPort {
        snapshots: Arc<RwLock<HashMap<CustomerNumber, CustomerSnapshot>>>,
        unavailable: AtomicBool,
    }

    impl MockSnapshotPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port
        pub async fn with_snapshots(snapshots: Vec<(CustomerNumber, CustomerSnapshot)>) -> Self {
            let port = Self::new();
            for (customer, snapshot) in snapshots {
                port.insert(customer, snapshot).await;
            }
            port
        }

        pub async fn insert(&self, customer: CustomerNumber, snapshot: CustomerSnapshot) {
            self.snapshots.write().await.insert(customer, snapshot);
        }

        /// Makes every fetch fail as if the upstream were down
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }
    }

    impl DomainPort for MockSnapshotPort {}

    #[async_trait]
    impl HealthCheckable for MockSnapshotPort {
        async fn health_check(&self) -> HealthCheckResult {
            if self.unavailable.load(Ordering::SeqCst) {
                return HealthCheckResult::unhealthy("mock-snapshot-port", "marked unavailable");
            }
            HealthCheckResult {
                adapter_id: "mock-snapshot-port".to_string(),
                status: AdapterHealth::Healthy,
                message: Some("Mock adapter always healthy".to_string()),
            }
        }
    }

    #[async_trait]
    impl CustomerSnapshotPort for MockSnapshotPort {
        async fn fetch_snapshot(&self, customer: &CustomerNumber) -> Result<CustomerSnapshot, PortError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(PortError::ServiceUnavailable {
                    service: "mock-snapshot-port".to_string(),
                });
            }
            self.snapshots
                .read()
                .await
                .get(customer)
                .cloned()
                .ok_or_else(|| PortError::not_found("Customer", customer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockSnapshotPort;
    use super::*;
    use core_kernel::AdapterHealth;

    #[tokio::test]
    async fn test_mock_port_returns_inserted_snapshot() {
        let customer = CustomerNumber::new("K-1");
        let port = MockSnapshotPort::with_snapshots(vec![(customer.clone(), CustomerSnapshot::default())]).await;

        let snapshot = port.fetch_snapshot(&customer).await.unwrap();
        assert_eq!(snapshot, CustomerSnapshot::default());
    }

    #[tokio::test]
    async fn test_mock_port_not_found() {
        let port = MockSnapshotPort::new();
        let result = port.fetch_snapshot(&CustomerNumber::new("missing")).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_mock_port_unavailable() {
        let port = MockSnapshotPort::new();
        port.set_unavailable(true);

        let result = port.fetch_snapshot(&CustomerNumber::new("K-1")).await;
        assert!(result.unwrap_err().is_transient());
        assert_eq!(port.health_check().await.status, AdapterHealth::Unhealthy);
    }
}
