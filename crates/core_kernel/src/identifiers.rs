//! Strongly-typed identifiers for domain entities
//!
//! Upstream systems hand out human-readable numbers (policy numbers, claim
//! numbers, product codes) rather than UUIDs. Newtype wrappers keep a policy
//! number from being compared with a claim number by accident.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, trimming surrounding whitespace
            pub fn new(value: impl Into<String>) -> Self {
                let value: String = value.into();
                Self(value.trim().to_string())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is blank
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Returns a human-readable label for the identifier kind
            pub fn label() -> &'static str {
                $label
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ClaimNumber, "skadenummer");
define_id!(PolicyNumber, "polisenummer");
define_id!(ProductCode, "produktkode");
define_id!(CustomerNumber, "kundenummer");
