//! File-backed customer snapshots
//!
//! Reads `<data_dir>/<customer>.json`, one export per customer, in the same
//! shape the upstream systems deliver.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use core_kernel::{
    AdapterHealth, CustomerNumber, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_analytics::{CustomerSnapshot, CustomerSnapshotPort};

const ADAPTER_ID: &str = "file-snapshot-adapter";

#[derive(Debug, Clone)]
pub struct FileSnapshotAdapter {
    data_dir: PathBuf,
}

impl FileSnapshotAdapter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of a customer's snapshot
    ///
    /// Customer numbers are restricted to ASCII letters, digits and `-` so
    /// they cannot name anything outside the data directory.
    fn snapshot_path(&self, customer: &CustomerNumber) -> Result<PathBuf, PortError> {
        let id = customer.as_str();
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(PortError::validation_field(
                format!("Invalid customer number '{}'", id),
                "customer",
            ));
        }
        Ok(self.data_dir.join(format!("{}.json", id)))
    }
}

impl DomainPort for FileSnapshotAdapter {}

#[async_trait]
impl HealthCheckable for FileSnapshotAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        match tokio::fs::metadata(&self.data_dir).await {
            Ok(meta) if meta.is_dir() => HealthCheckResult {
                adapter_id: ADAPTER_ID.to_string(),
                status: AdapterHealth::Healthy,
                message: Some(self.data_dir.display().to_string()),
            },
            Ok(_) => HealthCheckResult::unhealthy(
                ADAPTER_ID,
                format!("{} is not a directory", self.data_dir.display()),
            ),
            Err(e) => HealthCheckResult::unhealthy(
                ADAPTER_ID,
                format!("{}: {}", self.data_dir.display(), e),
            ),
        }
    }
}

#[async_trait]
impl CustomerSnapshotPort for FileSnapshotAdapter {
    async fn fetch_snapshot(&self, customer: &CustomerNumber) -> Result<CustomerSnapshot, PortError> {
        let path = self.snapshot_path(customer)?;

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PortError::not_found("Customer", customer));
            }
            Err(e) => {
                return Err(PortError::Connection {
                    message: format!("Could not read {}", path.display()),
                    source: Some(Box::new(e)),
                });
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            PortError::transformation(format!("Snapshot {} is not valid: {}", path.display(), e))
        })
    }
}
