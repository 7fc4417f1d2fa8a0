use crate::core::QueueClient;
use crate::utils::error::BoxError;
use async_trait::async_trait;
use std::io::{self, Write};
use std::sync::Mutex;

/// [`QueueClient`] that writes the message instead of sending it.
pub struct DryRunQueueClient<W: Write + Send> {
    out: Mutex<W>,
}

impl DryRunQueueClient<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> DryRunQueueClient<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> QueueClient for DryRunQueueClient<W> {
    async fn publish(
        &self,
        queue_url: &str,
        body: String,
        attributes: Vec<(String, String)>,
    ) -> Result<Option<String>, BoxError> {
        let mut out = self.out.lock().map_err(|_| "dry-run output lock poisoned")?;
        writeln!(out, "{}", body)?;
        for (name, value) in attributes {
            writeln!(out, "  attribute {} = {}", name, value)?;
        }
        writeln!(out, "  (not sent to {})", queue_url)?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::producer::HarvestProducer;
    use crate::core::{Journal, JournalSetting, SystemType};
    use crate::{DispatchOutcome, ImportQueueCreator};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_dry_run_goes_through_dispatch() {
        let client = Arc::new(DryRunQueueClient::new(Vec::new()));
        let creator = ImportQueueCreator::new(HarvestProducer::new(client.clone(), "dry-run"));
        let journal = Journal::new(8, "https://teckiz.example.com")
            .with_setting(JournalSetting::new("teckiz"));

        let outcome = creator.create_queue(&journal).await.unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Published {
                system_type: SystemType::Teckiz,
                message_id: None,
            }
        );

        // 沒有設定的 journal 在 dry run 也要失敗
        assert!(creator
            .create_queue(&Journal::new(9, "https://a.example"))
            .await
            .is_err());

        drop(creator);
        let client = Arc::try_unwrap(client).ok().unwrap();
        let output = String::from_utf8(client.into_inner()).unwrap();
        assert_eq!(
            output,
            "{\"url\":\"https://teckiz.example.com\",\"journal_key\":\"8\",\"system_type\":\"TECKIZ\",\"action\":\"harvest_teckiz\"}\n  attribute system_type = TECKIZ\n  attribute action = harvest_teckiz\n  (not sent to dry-run)\n"
        );
    }
}
