//! Problems found in the active-policy export

use serde::Serialize;
use std::fmt;

use core_kernel::PolicyNumber;

use crate::policy::{active_rows, ActivePolicy};

/// A non-fatal problem with an active coverage row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyWarning {
    /// `årspremie` was present but not a number and was counted as zero
    MalformedPremium {
        policy_number: Option<PolicyNumber>,
        coverage_id: Option<String>,
        raw: String,
    },
}

impl fmt::Display for PolicyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyWarning::MalformedPremium { policy_number, coverage_id, raw } => write!(
                f,
                "policy {} coverage {}: malformed annual premium '{}' counted as zero",
                policy_number.as_ref().map_or("-", PolicyNumber::as_str),
                coverage_id.as_deref().unwrap_or("-"),
                raw
            ),
        }
    }
}

/// One warning per active row whose premium could not be read
///
/// Inactive rows never reach a figure and are not reported.
pub fn premium_warnings(policies: &[ActivePolicy]) -> Vec<PolicyWarning> {
    active_rows(policies)
        .filter_map(|row| {
            row.annual_premium.malformed().map(|raw| PolicyWarning::MalformedPremium {
                policy_number: row.policy_number(),
                coverage_id: row.coverage_id.clone(),
                raw: raw.to_string(),
            })
        })
        .collect()
}
