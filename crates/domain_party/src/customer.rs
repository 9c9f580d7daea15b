//! Customer master data (`kundeInfo`)

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::loose;

use crate::error::PartyError;
use crate::identity::{IdentityValidationResult, IdentityValidator};

/// Customer details as delivered in the snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct CustomerInfo {
    #[serde(default, rename = "kundenummer", deserialize_with = "loose::text")]
    pub customer_number: Option<String>,

    #[serde(default, rename = "navn", deserialize_with = "loose::text")]
    #[validate(length(min = 1, message = "Customer name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default, rename = "fødselsnummer", alias = "fodselsnummer", deserialize_with = "loose::text")]
    pub national_id: Option<String>,

    #[serde(default, rename = "organisasjonsnummer", deserialize_with = "loose::text")]
    pub organization_number: Option<String>,

    #[serde(default, rename = "epost", alias = "e-post", deserialize_with = "loose::text")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(default, rename = "telefon", deserialize_with = "loose::text")]
    pub phone: Option<String>,
}

impl CustomerInfo {
    /// Validates the customer's identity number
    ///
    /// A customer without identity number yields the empty (valid) result.
    pub fn identity(&self) -> IdentityValidationResult {
        IdentityValidator::validate(self.national_id.as_deref().unwrap_or(""))
    }

    /// Runs field validation and the identity check
    ///
    /// # Errors
    ///
    /// Returns `PartyError::ValidationFailed` listing every problem found.
    pub fn check(&self) -> Result<(), PartyError> {
        let mut problems = Vec::new();

        if let Err(errors) = self.validate() {
            problems.push(errors.to_string());
        }
        if let Some(reason) = self.identity().reason {
            problems.push(reason);
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(PartyError::validation_failed(problems))
        }
    }
}
