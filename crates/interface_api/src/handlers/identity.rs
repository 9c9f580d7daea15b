//! Identity number validation

use axum::Json;

use domain_party::{IdentityValidationResult, IdentityValidator};

use crate::dto::identity::ValidateIdentityRequest;

/// Validates a fødselsnummer or D-nummer
///
/// Always answers 200; an invalid number is a result, not an error.
pub async fn validate_identity(
    Json(request): Json<ValidateIdentityRequest>,
) -> Json<IdentityValidationResult> {
    Json(IdentityValidator::validate(&request.national_id))
}
