//! tabpdf-lambda
//!
//! The three Lambda units (export, link, notify), the export orchestrator,
//! and the configuration they are built from. Each unit has its own binary
//! under `src/bin`.

pub mod config;
pub mod error;
pub mod events;
pub mod export;
pub mod response;
pub mod telemetry;
pub mod units;
