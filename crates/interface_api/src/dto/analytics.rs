//! Analytics DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_analytics::CustomerAnalytics;

/// Optional reference date, ISO 8601; defaults to today in the configured timezone
#[derive(Debug, Default, Deserialize)]
pub struct AsOfQuery {
    pub as_of: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    #[serde(flatten)]
    pub analytics: CustomerAnalytics,
    /// Risk reasons as Norwegian sentences, in the order of `risk.reasons`
    pub explanations: Vec<String>,
}
