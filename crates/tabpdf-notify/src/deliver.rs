use tracing::{error, info};

use crate::error::NotifyError;
use crate::mailer::Mailer;
use crate::message::Email;

/// Per-recipient outcome of a delivery run.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub delivered: Vec<String>,
    pub failed: Vec<(String, NotifyError)>,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }

    /// One-line summary of the failures, `None` when everything went out.
    pub fn failure_summary(&self) -> Option<String> {
        if self.failed.is_empty() {
            return None;
        }
        let details = self
            .failed
            .iter()
            .map(|(to, e)| format!("{to}: {e}"))
            .collect::<Vec<_>>()
            .join("; ");
        Some(format!(
            "failed to deliver to {} of {} recipients: {details}",
            self.failed.len(),
            self.attempted()
        ))
    }
}

/// Send each email in turn. A failed recipient is recorded and the run
/// continues with the next one.
pub async fn deliver<M: Mailer>(mailer: &M, emails: &[Email]) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    for email in emails {
        match mailer.send(email).await {
            Ok(()) => report.delivered.push(email.to.clone()),
            Err(e) => {
                error!(to = %email.to, error = %e, "email delivery failed");
                report.failed.push((email.to.clone(), e));
            }
        }
    }

    info!(
        delivered = report.delivered.len(),
        failed = report.failed.len(),
        "delivery finished"
    );
    report
}
