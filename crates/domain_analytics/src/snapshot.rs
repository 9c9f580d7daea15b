//! Customer snapshot and the derive-all pipeline
//!
//! A snapshot is everything the upstream systems know about one customer at
//! one moment. [`analyze`] derives every figure from a single snapshot and
//! returns them together, so callers cannot combine numbers from two
//! different fetches.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_claims::{
    Claim, ClaimNormalizer, NoopWarningSink, NormalizationWarning, RawClaim, WarningSink,
};
use domain_party::{CustomerInfo, IdentityValidationResult};
use domain_policy::{premium_warnings, ActivePolicy, PolicyWarning};

use crate::breakdown::{breakdown_by_classification, ClaimBreakdown};
use crate::metrics::{CustomerMetrics, MetricsAggregator};
use crate::products::{ProductAttribution, ProductAttributor};
use crate::risk::{RiskAssessment, RiskClassifier, RiskInputs, RiskThresholds};
use crate::timeseries::{TimeSeriesReconciler, YearAggregate, YearRow};

/// Raw customer payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    #[serde(default, rename = "kundeInfo")]
    pub customer: CustomerInfo,
    #[serde(default, rename = "aktivePolicies")]
    pub active_policies: Vec<ActivePolicy>,
    #[serde(default, rename = "skadehistorikk")]
    pub claim_history: Vec<RawClaim>,
    #[serde(default, rename = "årsdata", alias = "arsdata")]
    pub yearly_aggregates: Vec<YearAggregate>,
}

/// Everything derived from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerAnalytics {
    /// Reference date all windows are computed from
    pub as_of: NaiveDate,
    pub customer: CustomerInfo,
    pub identity: IdentityValidationResult,
    pub claims: Vec<Claim>,
    pub warnings: Vec<NormalizationWarning>,
    /// Active coverage rows whose premium could not be read
    pub policy_warnings: Vec<PolicyWarning>,
    pub metrics: CustomerMetrics,
    pub year_series: Vec<YearRow>,
    pub products: ProductAttribution,
    pub breakdown: ClaimBreakdown,
    pub risk: RiskAssessment,
}

/// Derives all analytics from `snapshot` as of `now`
pub fn analyze(snapshot: &CustomerSnapshot, now: NaiveDate, thresholds: &RiskThresholds) -> CustomerAnalytics {
    analyze_with_sink(snapshot, now, thresholds, &NoopWarningSink)
}

/// Like [`analyze`], reporting normalization warnings to `sink`
pub fn analyze_with_sink(
    snapshot: &CustomerSnapshot,
    now: NaiveDate,
    thresholds: &RiskThresholds,
    sink: &dyn WarningSink,
) -> CustomerAnalytics {
    let normalized = ClaimNormalizer::new().normalize_with_sink(&snapshot.claim_history, sink);
    let claims = normalized.claims;

    let year_series = TimeSeriesReconciler::new().build_year_series(
        &snapshot.yearly_aggregates,
        &claims,
        &snapshot.active_policies,
        now,
    );
    let metrics = MetricsAggregator::new().aggregate(&claims, &snapshot.active_policies, &year_series, now);
    let products = ProductAttributor::new().attribute_by_product(
        &snapshot.active_policies,
        &metrics.historical,
        &claims,
    );
    let breakdown = breakdown_by_classification(&claims);
    let risk = RiskClassifier::new(*thresholds).classify(&RiskInputs::from_metrics(&metrics, &year_series));

    CustomerAnalytics {
        as_of: now,
        identity: snapshot.customer.identity(),
        customer: snapshot.customer.clone(),
        claims,
        warnings: normalized.warnings,
        policy_warnings: premium_warnings(&snapshot.active_policies),
        metrics,
        year_series,
        products,
        breakdown,
        risk,
    }
}
