use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

use tabpdf_lambda::config::Config;
use tabpdf_lambda::telemetry;
use tabpdf_lambda::units::ExportUnit;
use tabpdf_secrets::SecretsManager;
use tabpdf_storage::S3Sink;
use tabpdf_tableau::TableauClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    if config.tableau_secret_name.is_none() {
        tracing::warn!("TABLEAU_SECRET_NAME is not set, every export will fail");
    }

    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let unit = ExportUnit::new(
        &config,
        SecretsManager::new(tabpdf_secrets::client::client_from_config(&aws)),
        TableauClient::new(reqwest::Client::new()),
        S3Sink::new(tabpdf_storage::client::client_from_config(&aws)),
    );

    let unit = &unit;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<_, Error>(unit.handle(event.payload).await)
    }))
    .await
    .map_err(|e| eyre::eyre!(e))
}
