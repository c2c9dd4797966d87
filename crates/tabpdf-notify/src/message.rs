pub const DEFAULT_SUBJECT: &str = "Dragonite has a message for you!";

/// Validity claimed in the email copy unless configured otherwise.
pub const DEFAULT_VALIDITY_HOURS: u64 = 48;

pub const CHARSET: &str = "UTF-8";

/// A report link to announce to a set of recipients.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    pub recipients: Vec<String>,
    pub sender: String,
    pub subject: String,
    /// Free text placed above the link.
    pub message: String,
    pub url: String,
}

/// One email to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

impl NotificationMessage {
    /// Expand into one individually addressed email per recipient, in order.
    pub fn emails(&self, validity_hours: u64) -> Vec<Email> {
        let body = render_body(&self.message, &self.url, validity_hours);
        self.recipients
            .iter()
            .map(|to| Email {
                to: to.clone(),
                from: self.sender.clone(),
                subject: self.subject.clone(),
                body: body.clone(),
            })
            .collect()
    }
}

/// Plain-text body announcing `url`.
pub fn render_body(message: &str, url: &str, validity_hours: u64) -> String {
    format!(
        "{message}\n\
         Here's a link to your PDF report: \n\
         Remember it's valid for only {validity_hours} hours!. \n \n \n\
         {url}\n \n \n\
         This is an automated message, please do not respond to this email. \
         If anything, feel free to contact the Analytics team."
    )
}
