use aws_sdk_secretsmanager::Client;

/// Build a Secrets Manager client from an already loaded config.
pub fn client_from_config(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
