use tracing_subscriber::EnvFilter;

/// Structured JSON logging for CloudWatch, filtered by `RUST_LOG`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();
}
