//! tabpdf-core
//!
//! Pure domain types, PDF export parameter building, and dashboard name
//! resolution. No AWS SDK or HTTP dependency.

pub mod error;
pub mod models;
pub mod params;
pub mod resolve;
