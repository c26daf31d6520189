//! Run notifications.
//!
//! Both pipeline stages finish by sending one plain-text email to a single
//! recipient. Delivery sits behind the [`Notifier`] capability so the core
//! never talks to a mail service directly.

mod outbox;
mod recording;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use outbox::OutboxNotifier;
pub use recording::RecordingNotifier;

use crate::{Res, config::MailConfig};

pub const EXTRACTION_SUBJECT: &str = "Event Notification - Spotify Extraction is Starting";
pub const EXTRACTION_BODY: &str =
    "Hello, this is a reminder that your Spotify extraction is starting.";
pub const TRANSFORMATION_SUBJECT: &str = "Event Notification - Spotify transformation completed";
pub const TRANSFORMATION_BODY: &str =
    "Hello, this is to inform that spotify data is transformed successfully.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub source: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl Email {
    pub fn new(mail: &MailConfig, subject: &str, body: &str) -> Self {
        Self {
            source: mail.sender.clone(),
            to: mail.recipient.clone(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    pub fn extraction_started(mail: &MailConfig) -> Self {
        Self::new(mail, EXTRACTION_SUBJECT, EXTRACTION_BODY)
    }

    pub fn transformation_completed(mail: &MailConfig) -> Self {
        Self::new(mail, TRANSFORMATION_SUBJECT, TRANSFORMATION_BODY)
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, email: &Email) -> Res<()>;
}
