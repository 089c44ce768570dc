use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use store::QuotationStore;

/// Records every insert attempt. Can be made slow or failing.
#[derive(Default)]
pub struct RecordingStore {
    pub attempts: Mutex<Vec<String>>,
    pub delay: Option<Duration>,
    pub fail: bool,
}

impl RecordingStore {
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub async fn attempts(&self) -> Vec<String> {
        self.attempts.lock().await.clone()
    }
}

#[async_trait]
impl QuotationStore for RecordingStore {
    async fn insert(&self, bid: &str, _recorded_at: DateTime<Utc>) -> anyhow::Result<i64> {
        let id = {
            let mut attempts = self.attempts.lock().await;
            attempts.push(bid.to_string());
            attempts.len() as i64
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            anyhow::bail!("disk I/O error");
        }

        Ok(id)
    }
}
