use std::future::Future;

use aws_sdk_secretsmanager::Client;
use tabpdf_core::models::credentials::CredentialBundle;
use tracing::info;

use crate::error::SecretsError;

/// Source of Tableau credentials, keyed by secret id.
pub trait SecretProvider {
    fn credentials(
        &self,
        secret_id: &str,
    ) -> impl Future<Output = Result<CredentialBundle, SecretsError>> + Send;
}

/// [`SecretProvider`] backed by AWS Secrets Manager.
#[derive(Clone)]
pub struct SecretsManager {
    client: Client,
}

impl SecretsManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl SecretProvider for SecretsManager {
    async fn credentials(&self, secret_id: &str) -> Result<CredentialBundle, SecretsError> {
        fetch_credentials(&self.client, secret_id).await
    }
}

/// Fetch and parse the credential bundle stored under `secret_id`.
pub async fn fetch_credentials(
    client: &Client,
    secret_id: &str,
) -> Result<CredentialBundle, SecretsError> {
    info!(secret_id, "retrieving tableau credentials");

    let resp = client
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|e| SecretsError::GetSecretValue(e.into_service_error().to_string()))?;

    let secret = resp
        .secret_string()
        .ok_or_else(|| SecretsError::MissingSecretString {
            secret_id: secret_id.to_string(),
        })?;

    parse_credentials(secret)
}

/// Parse the JSON body of a credential secret.
pub fn parse_credentials(secret: &str) -> Result<CredentialBundle, SecretsError> {
    Ok(serde_json::from_str(secret)?)
}
