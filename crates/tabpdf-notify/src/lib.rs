//! tabpdf-notify
//!
//! Report link emails via Amazon SES.

pub mod client;
pub mod deliver;
pub mod error;
pub mod mailer;
pub mod message;

pub use mailer::{Mailer, SesMailer};
