//! Customer Risk Analytics
//!
//! Derives one consistent set of figures for a customer from the raw
//! snapshot the upstream systems deliver:
//!
//! ```text
//! CustomerSnapshot
//!   -> ClaimNormalizer            canonical claims + warnings
//!   -> TimeSeriesReconciler       closed years + running year
//!   -> MetricsAggregator          trailing 12 months, history, active portfolio
//!   -> ProductAttributor          per-product premium and claims
//!   -> RiskClassifier             tier, trend and reasons
//! ```
//!
//! Every step is a pure function of its inputs and the reference date
//! `now`; nothing reads the clock.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use domain_analytics::{analyze, CustomerSnapshot, RiskThresholds, RiskTier};
//!
//! let snapshot: CustomerSnapshot = serde_json::from_str(r#"{
//!     "kundeInfo": {"kundenummer": "K-1", "navn": "Kari Nordmann"},
//!     "aktivePolicies": [{"polisenummer": "P1", "årspremie": 12000, "produktkode": "BIL"}],
//!     "skadehistorikk": [],
//!     "årsdata": [{"år": 2024, "premie": 12000, "skadekostnad": 3000, "antallSkader": 1}]
//! }"#).unwrap();
//!
//! let thresholds = RiskThresholds {
//!     loss_ratio_high: dec!(70),
//!     loss_ratio_moderate: dec!(30),
//!     frequency_high: dec!(10),
//!     frequency_moderate: dec!(5),
//! };
//! let now = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
//! let analytics = analyze(&snapshot, now, &thresholds);
//!
//! assert_eq!(analytics.year_series.len(), 2);
//! assert_eq!(analytics.risk.tier, RiskTier::Low);
//! ```

pub mod breakdown;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod products;
pub mod risk;
pub mod service;
pub mod snapshot;
pub mod timeseries;

pub use breakdown::{breakdown_by_classification, CategoryRow, ClaimBreakdown, UNCLASSIFIED};
pub use error::AnalyticsError;
pub use metrics::{claims_per_year, loss_ratio_percent, CustomerMetrics, MetricsAggregator, PeriodMetrics};
pub use ports::CustomerSnapshotPort;
pub use products::{ProductAttribution, ProductAttributor, ProductRow};
pub use risk::{RiskAssessment, RiskClassifier, RiskInputs, RiskReason, RiskThresholds, RiskTier, Trend};
pub use service::AnalyticsService;
pub use snapshot::{analyze, analyze_with_sink, CustomerAnalytics, CustomerSnapshot};
pub use timeseries::{pro_rata_premium, TimeSeriesReconciler, YearAggregate, YearRow};
