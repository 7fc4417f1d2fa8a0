use crate::domain::model::{HarvestMessage, Journal};
use crate::utils::error::{BoxError, QueueError};
use async_trait::async_trait;

/// Transport used by the producer. One call is one publish attempt.
#[async_trait]
pub trait QueueClient: Send + Sync {
    /// Returns the provider-assigned message id, when the service reports one.
    async fn publish(
        &self,
        queue_url: &str,
        body: String,
        attributes: Vec<(String, String)>,
    ) -> std::result::Result<Option<String>, BoxError>;
}

#[async_trait]
impl<Q: QueueClient + ?Sized> QueueClient for std::sync::Arc<Q> {
    async fn publish(
        &self,
        queue_url: &str,
        body: String,
        attributes: Vec<(String, String)>,
    ) -> std::result::Result<Option<String>, BoxError> {
        (**self).publish(queue_url, body, attributes).await
    }
}

/// Hooks invoked on dispatch outcomes. Never affects control flow.
pub trait DispatchObserver: Send + Sync {
    fn on_published(&self, _message: &HarvestMessage, _message_id: Option<&str>) {}

    fn on_publish_failed(&self, _message: &HarvestMessage, _error: &QueueError) {}

    fn on_skipped(&self, _journal: &Journal, _system: &str) {}
}
