use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

use tabpdf_lambda::config::Config;
use tabpdf_lambda::telemetry;
use tabpdf_lambda::units::LinkUnit;
use tabpdf_storage::S3Sink;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;
    let s3 = tabpdf_storage::client::build_client().await;
    let unit = LinkUnit::new(&config, S3Sink::new(s3));

    let unit = &unit;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<_, Error>(unit.handle(event.payload).await)
    }))
    .await
    .map_err(|e| eyre::eyre!(e))
}
