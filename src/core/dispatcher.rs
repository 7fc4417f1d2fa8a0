use crate::core::producer::HarvestProducer;
use crate::core::{Journal, QueueClient, SystemType};
use crate::utils::error::{QueueError, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Published {
        system_type: SystemType,
        message_id: Option<String>,
    },
    /// The journal's system has no harvest integration.
    Skipped { system: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchFailure {
    pub journal_key: String,
    pub error: String,
    pub retryable: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchReport {
    pub published: usize,
    pub skipped: usize,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Picks the harvest message for a journal and hands it to the producer.
pub struct ImportQueueCreator<Q: QueueClient> {
    producer: HarvestProducer<Q>,
    strict_systems: bool,
}

impl<Q: QueueClient> ImportQueueCreator<Q> {
    pub fn new(producer: HarvestProducer<Q>) -> Self {
        Self {
            producer,
            strict_systems: false,
        }
    }

    /// Reject unrecognized systems with [`QueueError::UnsupportedSystem`]
    /// instead of skipping them.
    pub fn strict(mut self, strict_systems: bool) -> Self {
        self.strict_systems = strict_systems;
        self
    }

    pub fn producer(&self) -> &HarvestProducer<Q> {
        &self.producer
    }

    pub async fn create_queue(&self, journal: &Journal) -> Result<DispatchOutcome> {
        let setting = journal
            .setting()
            .ok_or_else(|| QueueError::configuration("journal setting not found"))?;

        if !setting.has_system() {
            return Err(QueueError::configuration("system not found"));
        }

        let system_type = match setting.system_type() {
            Ok(system_type) => system_type,
            Err(unknown) if self.strict_systems => {
                tracing::error!(
                    journal_key = %journal.journal_key(),
                    system = %unknown.0,
                    "❌ Journal system has no harvest integration"
                );
                return Err(QueueError::UnsupportedSystem { system: unknown.0 });
            }
            Err(unknown) => {
                tracing::warn!(
                    journal_key = %journal.journal_key(),
                    system = %unknown.0,
                    "⚠️ Journal system has no harvest integration, nothing queued"
                );
                self.producer.observer().on_skipped(journal, &unknown.0);
                return Ok(DispatchOutcome::Skipped { system: unknown.0 });
            }
        };

        tracing::debug!(
            journal_key = %journal.journal_key(),
            system_type = %system_type,
            "Dispatching journal to harvest queue"
        );

        let message_id = match system_type {
            SystemType::OjsOai => self.producer.send_ojs_oai_message(journal).await?,
            SystemType::Teckiz => self.producer.send_teckiz_message(journal).await?,
            SystemType::Doaj => self.producer.send_doaj_message(journal).await?,
        };

        Ok(DispatchOutcome::Published {
            system_type,
            message_id,
        })
    }

    /// Dispatches each journal independently; a failure is recorded and the
    /// remaining journals are still sent.
    pub async fn create_queues(&self, journals: &[Journal]) -> DispatchReport {
        let mut report = DispatchReport::default();

        for journal in journals {
            match self.create_queue(journal).await {
                Ok(DispatchOutcome::Published { .. }) => report.published += 1,
                Ok(DispatchOutcome::Skipped { .. }) => report.skipped += 1,
                Err(e) => report.failures.push(DispatchFailure {
                    journal_key: journal.journal_key(),
                    error: e.to_string(),
                    retryable: e.is_retryable(),
                }),
            }
        }

        tracing::info!(
            published = report.published,
            skipped = report.skipped,
            failed = report.failed(),
            "📊 Batch dispatch finished"
        );

        report
    }
}
