//! Party Domain
//!
//! Customer master data and Norwegian identity-number validation.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::{IdentityValidator, Sex};
//!
//! let result = IdentityValidator::validate("01129955151");
//! assert!(result.valid);
//! assert_eq!(result.sex, Some(Sex::Male));
//! assert!(!result.is_d_number);
//! ```

pub mod customer;
pub mod error;
pub mod identity;

pub use customer::CustomerInfo;
pub use error::PartyError;
pub use identity::{IdentityError, IdentityValidationResult, IdentityValidator, Sex, ID_LENGTH};
