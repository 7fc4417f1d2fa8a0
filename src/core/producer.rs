use crate::core::observer::TracingObserver;
use crate::core::{DispatchObserver, HarvestMessage, Journal, QueueClient, SystemType};
use crate::utils::error::{QueueError, Result};
use std::sync::Arc;

/// Builds harvest messages and publishes them to a single queue.
///
/// Queue identity is fixed at construction. The producer holds no per-call
/// state, so one instance can be shared across tasks.
pub struct HarvestProducer<Q: QueueClient> {
    client: Q,
    queue_url: String,
    observer: Arc<dyn DispatchObserver>,
}

impl<Q: QueueClient> HarvestProducer<Q> {
    pub fn new(client: Q, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    pub(crate) fn observer(&self) -> &dyn DispatchObserver {
        self.observer.as_ref()
    }

    pub async fn send_ojs_oai_message(&self, journal: &Journal) -> Result<Option<String>> {
        self.send_for(SystemType::OjsOai, journal).await
    }

    pub async fn send_teckiz_message(&self, journal: &Journal) -> Result<Option<String>> {
        self.send_for(SystemType::Teckiz, journal).await
    }

    pub async fn send_doaj_message(&self, journal: &Journal) -> Result<Option<String>> {
        self.send_for(SystemType::Doaj, journal).await
    }

    pub async fn send_for(
        &self,
        system_type: SystemType,
        journal: &Journal,
    ) -> Result<Option<String>> {
        let message = HarvestMessage::for_journal(system_type, journal);
        self.send_message(&message).await
    }

    /// Publishes `message` once. Any transport or service error is returned
    /// as [`QueueError::PublishError`] with the client error as its source.
    pub async fn send_message(&self, message: &HarvestMessage) -> Result<Option<String>> {
        let body = message.to_json()?;

        tracing::debug!(
            queue_url = %self.queue_url,
            journal_key = %message.journal_key,
            body_length = body.len(),
            "Sending harvest message"
        );

        match self
            .client
            .publish(&self.queue_url, body, message.attributes())
            .await
        {
            Ok(message_id) => {
                self.observer.on_published(message, message_id.as_deref());
                Ok(message_id)
            }
            Err(source) => {
                let error = QueueError::PublishError {
                    queue_url: self.queue_url.clone(),
                    source,
                };
                self.observer.on_publish_failed(message, &error);
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BoxError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const QUEUE_URL: &str = "https://sqs.ap-southeast-2.amazonaws.com/123456789012/journal-harvest";

    #[derive(Default)]
    struct StubClient {
        calls: Mutex<Vec<(String, String, Vec<(String, String)>)>>,
        fail: bool,
    }

    #[async_trait]
    impl QueueClient for StubClient {
        async fn publish(
            &self,
            queue_url: &str,
            body: String,
            attributes: Vec<(String, String)>,
        ) -> std::result::Result<Option<String>, BoxError> {
            self.calls
                .lock()
                .unwrap()
                .push((queue_url.to_string(), body, attributes));
            if self.fail {
                Err("AWS.SimpleQueueService.NonExistentQueue".into())
            } else {
                Ok(Some("msg-1".to_string()))
            }
        }
    }

    #[tokio::test]
    async fn test_send_ojs_oai_message() {
        let producer = HarvestProducer::new(StubClient::default(), QUEUE_URL);
        let journal = Journal::new(15, "https://ojs.example.edu/index.php/jrn");

        let message_id = producer.send_ojs_oai_message(&journal).await.unwrap();
        assert_eq!(message_id.as_deref(), Some("msg-1"));

        let calls = producer.client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (queue_url, body, attributes) = &calls[0];
        assert_eq!(queue_url, QUEUE_URL);
        assert_eq!(
            body,
            r#"{"url":"https://ojs.example.edu/index.php/jrn","journal_key":"15","system_type":"OJS_OAI","action":"harvest_oai"}"#
        );
        assert_eq!(attributes[0], ("system_type".to_string(), "OJS_OAI".to_string()));
        assert_eq!(attributes[1], ("action".to_string(), "harvest_oai".to_string()));
    }

    #[tokio::test]
    async fn test_publish_failure_is_wrapped() {
        let client = StubClient {
            fail: true,
            ..Default::default()
        };
        let producer = HarvestProducer::new(client, QUEUE_URL);
        let journal = Journal::new(3, "https://doaj.example.org");

        let err = producer.send_doaj_message(&journal).await.unwrap_err();
        match &err {
            QueueError::PublishError { queue_url, source } => {
                assert_eq!(queue_url, QUEUE_URL);
                assert_eq!(source.to_string(), "AWS.SimpleQueueService.NonExistentQueue");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(producer.client.calls.lock().unwrap().len(), 1);
    }
}
