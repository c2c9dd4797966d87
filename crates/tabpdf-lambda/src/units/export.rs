use serde_json::Value;
use tracing::{info, warn};

use tabpdf_core::params::build_params;
use tabpdf_secrets::SecretProvider;
use tabpdf_secrets::error::SecretsError;
use tabpdf_storage::ObjectSink;
use tabpdf_tableau::{Connector, DashboardSession};

use crate::config::Config;
use crate::error::UnitError;
use crate::events::ExportEvent;
use crate::export::export_to_storage;
use crate::response::{Outcome, UnitResponse};

/// Generate-and-store: render a Tableau view or workbook to PDF and upload it.
pub struct ExportUnit<P, C, K> {
    secret_name: Option<String>,
    secrets: P,
    connector: C,
    sink: K,
}

impl<P, C, K> ExportUnit<P, C, K>
where
    P: SecretProvider,
    C: Connector,
    K: ObjectSink,
{
    pub fn new(config: &Config, secrets: P, connector: C, sink: K) -> Self {
        Self {
            secret_name: config.tableau_secret_name.clone(),
            secrets,
            connector,
            sink,
        }
    }

    pub async fn handle(&self, event: Value) -> UnitResponse {
        Outcome::from(self.run(event).await.map(|_| None::<String>)).into_response()
    }

    async fn run(&self, event: Value) -> Result<(), UnitError> {
        let event: ExportEvent = serde_json::from_value(event)?;
        let request = event.into_request()?;

        let params = build_params(&request.export_params);
        info!(params = ?params, "view params that will be used");

        let secret_id = self
            .secret_name
            .as_deref()
            .ok_or(SecretsError::MissingSecretId)?;
        let creds = self.secrets.credentials(secret_id).await?;

        let session = self.connector.sign_in(&creds).await?;
        let result = export_to_storage(&session, &self.sink, &request, &params).await;

        if let Err(e) = session.sign_out().await {
            warn!(error = %e, "tableau sign-out failed");
        }

        let size = result?;
        info!(
            bucket = %request.bucket,
            key = %request.object_key,
            bytes = size,
            "pdf uploaded to s3"
        );
        Ok(())
    }
}
