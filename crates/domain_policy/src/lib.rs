//! Policy Domain
//!
//! Read-only view of a customer's active policies as exported by the policy
//! system: one row per coverage, grouped into agreements by policy number.
//!
//! # Example
//!
//! ```rust
//! use domain_policy::{ActivePolicy, PortfolioSummary};
//!
//! let rows: Vec<ActivePolicy> = serde_json::from_str(r#"[
//!     {"polisenummer": "P1", "status": "Aktiv", "årspremie": 6000, "produktkode": "BIL"},
//!     {"polisenummer": "P1", "status": "Aktiv", "årspremie": 1500, "produktkode": "BIL"}
//! ]"#).unwrap();
//!
//! let summary = PortfolioSummary::summarize(&rows);
//! assert_eq!(summary.policy_count, 1);
//! assert_eq!(summary.coverage_count, 2);
//! ```

pub mod policy;
pub mod portfolio;
pub mod status;
pub mod warning;

pub use policy::{active_rows, ActivePolicy};
pub use portfolio::{active_products, PortfolioSummary};
pub use status::PolicyStatus;
pub use warning::{premium_warnings, PolicyWarning};
