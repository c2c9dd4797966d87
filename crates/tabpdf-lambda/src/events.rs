//! Invocation payloads, one per unit.

use serde::Deserialize;

use tabpdf_core::error::CoreError;
use tabpdf_core::models::export::{ExportConfig, ExportRequest};
use tabpdf_notify::message::{DEFAULT_SUBJECT, NotificationMessage};

#[derive(Debug, Clone, Deserialize)]
pub struct ExportEvent {
    /// `View` or `Workbook`; anything else is rejected before any export.
    #[serde(default)]
    pub file_from: String,
    pub tableau_name: String,
    pub bucket_name: String,
    pub object_name: String,
    pub tableau_params: ExportConfig,
}

impl ExportEvent {
    pub fn into_request(self) -> Result<ExportRequest, CoreError> {
        Ok(ExportRequest {
            source_kind: self.file_from.parse()?,
            source_name: self.tableau_name,
            bucket: self.bucket_name,
            object_key: self.object_name,
            export_params: self.tableau_params,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkEvent {
    #[serde(default)]
    pub bucket_name: String,
    #[serde(default)]
    pub object_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifyEvent {
    pub emails: Vec<String>,
    pub email_sender: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<NotifyEvent> for NotificationMessage {
    fn from(event: NotifyEvent) -> Self {
        NotificationMessage {
            recipients: event.emails,
            sender: event.email_sender,
            subject: event.subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            message: event.message.unwrap_or_default(),
            url: event.url,
        }
    }
}
