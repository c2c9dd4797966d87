use serde_json::Value;
use tracing::info;

use tabpdf_notify::Mailer;
use tabpdf_notify::deliver::deliver;
use tabpdf_notify::message::NotificationMessage;

use crate::config::Config;
use crate::error::UnitError;
use crate::events::NotifyEvent;
use crate::response::{Outcome, UnitResponse};

/// Notification: email the report link to every recipient, one email each.
pub struct NotifyUnit<M> {
    mailer: M,
    validity_hours: u64,
}

impl<M: Mailer> NotifyUnit<M> {
    pub fn new(config: &Config, mailer: M) -> Self {
        Self {
            mailer,
            validity_hours: config.link_validity_hours,
        }
    }

    pub async fn handle(&self, event: Value) -> UnitResponse {
        Outcome::from(self.run(event).await.map(|()| None::<String>)).into_response()
    }

    async fn run(&self, event: Value) -> Result<(), UnitError> {
        let event: NotifyEvent = serde_json::from_value(event)?;
        let message = NotificationMessage::from(event);
        let emails = message.emails(self.validity_hours);

        let report = deliver(&self.mailer, &emails).await;
        if let Some(summary) = report.failure_summary() {
            return Err(UnitError::Delivery(summary));
        }

        info!(recipients = report.delivered.len(), "mail delivered");
        Ok(())
    }
}
