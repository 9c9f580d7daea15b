//! Policy status as reported by the policy system

use serde::{Serialize, Serializer};
use std::fmt;

/// Lifecycle status of a policy row
///
/// Only [`PolicyStatus::Active`] rows take part in metrics. A row without
/// status is taken to be active, since the active-policy export omits the
/// field for in-force policies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PolicyStatus {
    Active,
    Cancelled,
    Expired,
    Quote,
    /// Any status text the policy system may add later
    Other(String),
}

impl PolicyStatus {
    /// Parses the upstream status text; missing means active
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return PolicyStatus::Active;
        };

        match raw.to_lowercase().as_str() {
            "aktiv" | "active" | "i kraft" => PolicyStatus::Active,
            "kansellert" | "cancelled" | "canceled" | "annullert" => PolicyStatus::Cancelled,
            "utgått" | "utgatt" | "expired" | "opphørt" | "opphort" => PolicyStatus::Expired,
            "tilbud" | "quote" | "quoted" => PolicyStatus::Quote,
            _ => PolicyStatus::Other(raw.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PolicyStatus::Active)
    }

    /// Norwegian label
    pub fn label(&self) -> &str {
        match self {
            PolicyStatus::Active => "Aktiv",
            PolicyStatus::Cancelled => "Kansellert",
            PolicyStatus::Expired => "Utgått",
            PolicyStatus::Quote => "Tilbud",
            PolicyStatus::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for PolicyStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}
