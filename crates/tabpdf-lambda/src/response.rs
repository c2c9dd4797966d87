use serde::Serialize;
use tracing::error;

use crate::error::UnitError;

/// Wire result returned by every unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UnitResponse {
    pub fn ok(results: Option<String>) -> Self {
        Self {
            status_code: 200,
            results,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            results: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

/// How an invocation ended, before it is flattened onto the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(Option<String>),
    InvalidInput(String),
    UpstreamError(String),
}

impl From<Result<Option<String>, UnitError>> for Outcome {
    fn from(result: Result<Option<String>, UnitError>) -> Self {
        match result {
            Ok(results) => Outcome::Success(results),
            Err(e) if e.is_invalid_input() => Outcome::InvalidInput(e.to_string()),
            Err(e) => Outcome::UpstreamError(e.to_string()),
        }
    }
}

impl Outcome {
    /// Log failures and map to the uniform 200/500 response.
    pub fn into_response(self) -> UnitResponse {
        match self {
            Outcome::Success(results) => UnitResponse::ok(results),
            Outcome::InvalidInput(message) => {
                error!(kind = "invalid_input", "{message}");
                UnitResponse::failed(message)
            }
            Outcome::UpstreamError(message) => {
                error!(kind = "upstream_error", "unexpected error: {message}");
                UnitResponse::failed(message)
            }
        }
    }
}
