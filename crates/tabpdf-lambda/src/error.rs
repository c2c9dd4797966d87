use thiserror::Error;

use tabpdf_core::error::{CoreError, ResolveError};
use tabpdf_secrets::error::SecretsError;
use tabpdf_storage::error::StorageError;
use tabpdf_tableau::error::TableauError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Everything that can end a unit invocation early.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    NotFound(#[from] ResolveError),

    #[error(transparent)]
    Secrets(#[from] SecretsError),

    #[error(transparent)]
    Tableau(#[from] TableauError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Delivery(String),
}

impl UnitError {
    /// Whether the caller's event, rather than a collaborator, is at fault.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, UnitError::InvalidInput(_) | UnitError::NotFound(_))
    }
}

impl From<CoreError> for UnitError {
    fn from(e: CoreError) -> Self {
        UnitError::InvalidInput(e.to_string())
    }
}

impl From<serde_json::Error> for UnitError {
    fn from(e: serde_json::Error) -> Self {
        UnitError::InvalidInput(format!("malformed event: {e}"))
    }
}
