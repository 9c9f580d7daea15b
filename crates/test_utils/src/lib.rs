//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! analytics test suites.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data (dates, identity numbers, a sample customer)
//! - `builders`: Builder patterns for raw payload rows
//! - `assertions`: Custom assertion helpers for money and derived figures
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
