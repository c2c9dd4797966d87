use std::time::Duration;

use serde_json::Value;
use tracing::info;

use tabpdf_storage::ObjectSink;

use crate::config::Config;
use crate::error::UnitError;
use crate::events::LinkEvent;
use crate::response::{Outcome, UnitResponse};

/// Link generation: a presigned GET URL for a stored PDF.
pub struct LinkUnit<K> {
    sink: K,
    expires_in: Duration,
}

impl<K: ObjectSink> LinkUnit<K> {
    pub fn new(config: &Config, sink: K) -> Self {
        Self {
            sink,
            expires_in: config.link_expires_in,
        }
    }

    pub async fn handle(&self, event: Value) -> UnitResponse {
        Outcome::from(self.run(event).await.map(Some)).into_response()
    }

    async fn run(&self, event: Value) -> Result<String, UnitError> {
        let event: LinkEvent = serde_json::from_value(event)?;
        info!(key = %event.object_name, "attempting to get url");

        let url = self
            .sink
            .signed_url(&event.bucket_name, &event.object_name, self.expires_in)
            .await?;

        info!(key = %event.object_name, "generated pdf url");
        Ok(url)
    }
}
