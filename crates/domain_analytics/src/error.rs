//! Analytics errors

use thiserror::Error;

use core_kernel::PortError;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The snapshot could not be fetched; nothing was derived
    #[error("Could not fetch snapshot for customer {customer}: {source}")]
    Fetch {
        customer: String,
        #[source]
        source: PortError,
    },

    #[error("Invalid customer number: {0}")]
    InvalidCustomerNumber(String),
}

impl AnalyticsError {
    pub fn fetch(customer: impl Into<String>, source: PortError) -> Self {
        AnalyticsError::Fetch {
            customer: customer.into(),
            source,
        }
    }

    /// True if the customer does not exist upstream
    pub fn is_not_found(&self) -> bool {
        matches!(self, AnalyticsError::Fetch { source, .. } if source.is_not_found())
    }
}
