use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretsError {
    #[error("no credential secret configured")]
    MissingSecretId,

    #[error("secret {secret_id} has no string value")]
    MissingSecretString { secret_id: String },

    #[error("malformed credential bundle: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Secrets Manager GetSecretValue error: {0}")]
    GetSecretValue(String),
}
