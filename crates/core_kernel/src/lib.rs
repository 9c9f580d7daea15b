//! Core Kernel - Foundational types and utilities for the analytics engine
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Money types with precise decimal arithmetic
//! - National date parsing and reporting windows
//! - Identifier newtypes for upstream numbers
//! - Lenient decoding helpers for loosely typed payloads
//! - Port infrastructure for the data-access boundary

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod loose;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{DateRange, Timezone, TemporalError, parse_national_date, months_elapsed};
pub use identifiers::{ClaimNumber, PolicyNumber, ProductCode, CustomerNumber};
pub use loose::LooseAmount;
pub use ports::{PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable};
