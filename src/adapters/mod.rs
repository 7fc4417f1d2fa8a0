// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod dry_run;
pub mod sqs;

pub use dry_run::DryRunQueueClient;
pub use sqs::SqsQueueClient;
