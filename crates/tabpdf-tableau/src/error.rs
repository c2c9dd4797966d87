use thiserror::Error;

/// Errors from the Tableau REST API.
#[derive(Debug, Error)]
pub enum TableauError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from Tableau.
    #[error("Tableau API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// A response body did not have the expected shape.
    #[error("invalid Tableau response: {0}")]
    InvalidResponse(String),
}
