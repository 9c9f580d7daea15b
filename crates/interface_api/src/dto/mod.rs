//! Request and response bodies

pub mod analytics;
pub mod identity;
