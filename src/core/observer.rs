use crate::core::{DispatchObserver, HarvestMessage};
use crate::utils::error::QueueError;

/// Default observer: emits structured `tracing` events for publish results.
/// Skips are already logged by the dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn on_published(&self, message: &HarvestMessage, message_id: Option<&str>) {
        tracing::info!(
            journal_key = %message.journal_key,
            system_type = %message.system_type,
            action = %message.action,
            message_id = message_id.unwrap_or("-"),
            "✅ Harvest message sent"
        );
    }

    fn on_publish_failed(&self, message: &HarvestMessage, error: &QueueError) {
        tracing::error!(
            journal_key = %message.journal_key,
            system_type = %message.system_type,
            error = %error,
            "❌ Failed to send harvest message"
        );
    }
}
