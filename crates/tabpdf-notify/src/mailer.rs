use std::future::Future;

use aws_sdk_sesv2::Client;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use tracing::info;

use crate::error::NotifyError;
use crate::message::{CHARSET, Email};

/// Sends a single email.
pub trait Mailer {
    fn send(&self, email: &Email) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// [`Mailer`] backed by the SES v2 `SendEmail` API.
#[derive(Clone)]
pub struct SesMailer {
    client: Client,
}

impl SesMailer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn content(data: &str) -> Result<Content, NotifyError> {
    Content::builder()
        .data(data)
        .charset(CHARSET)
        .build()
        .map_err(|e| NotifyError::Build(e.to_string()))
}

impl Mailer for SesMailer {
    async fn send(&self, email: &Email) -> Result<(), NotifyError> {
        info!(to = %email.to, "sending report link");

        let message = Message::builder()
            .subject(content(&email.subject)?)
            .body(Body::builder().text(content(&email.body)?).build())
            .build();

        let resp = self
            .client
            .send_email()
            .from_email_address(&email.from)
            .destination(Destination::builder().to_addresses(&email.to).build())
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .map_err(|e| NotifyError::SendEmail(e.into_service_error().to_string()))?;

        info!(to = %email.to, message_id = resp.message_id().unwrap_or_default(), "email sent");
        Ok(())
    }
}
