use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Email, Notifier};
use crate::Res;

/// Keeps sent emails in memory. Clones share the same mailbox.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Email>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<Email> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, email: &Email) -> Res<()> {
        self.sent.lock().await.push(email.clone());
        Ok(())
    }
}
