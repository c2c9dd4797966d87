use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

use tabpdf_lambda::config::Config;
use tabpdf_lambda::telemetry;
use tabpdf_lambda::units::NotifyUnit;
use tabpdf_notify::SesMailer;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    let ses = tabpdf_notify::client::build_client_with_region(&config.ses_region).await;
    let unit = NotifyUnit::new(&config, SesMailer::new(ses));

    let unit = &unit;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<_, Error>(unit.handle(event.payload).await)
    }))
    .await
    .map_err(|e| eyre::eyre!(e))
}
