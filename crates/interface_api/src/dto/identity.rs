//! Identity DTOs

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ValidateIdentityRequest {
    #[serde(rename = "fødselsnummer", alias = "fodselsnummer")]
    pub national_id: String,
}
