use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Email, Notifier};
use crate::{EtlError, Res, storage::OutputStamp, success};

/// Drops every email as a JSON file into an outbox directory.
///
/// A mail relay (or a person) picks the files up from there; the run only
/// guarantees the message was handed off.
#[derive(Debug, Clone)]
pub struct OutboxNotifier {
    dir: PathBuf,
    stamp: Arc<Mutex<OutputStamp>>,
}

impl OutboxNotifier {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            stamp: Arc::new(Mutex::new(OutputStamp::new())),
        }
    }
}

#[async_trait]
impl Notifier for OutboxNotifier {
    async fn send(&self, email: &Email) -> Res<()> {
        async_fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| EtlError::Notify(e.to_string()))?;

        let name = format!("email_{}.json", self.stamp.lock().await.next());
        let json =
            serde_json::to_string_pretty(email).map_err(|e| EtlError::Notify(e.to_string()))?;
        async_fs::write(self.dir.join(&name), json)
            .await
            .map_err(|e| EtlError::Notify(e.to_string()))?;

        success!("Email \"{}\" queued for {}", email.subject, email.to);
        Ok(())
    }
}
