use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to build email: {0}")]
    Build(String),

    #[error("SES SendEmail error: {0}")]
    SendEmail(String),
}
