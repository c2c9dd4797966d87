//! tabpdf-secrets
//!
//! Tableau credential retrieval from AWS Secrets Manager.

pub mod client;
pub mod credentials;
pub mod error;

pub use credentials::{SecretProvider, SecretsManager};
