pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{DryRunQueueClient, SqsQueueClient};
pub use config::{QueueConfig, TomlConfig};
pub use core::dispatcher::{DispatchOutcome, DispatchReport, ImportQueueCreator};
pub use core::observer::TracingObserver;
pub use core::producer::HarvestProducer;
pub use domain::model::{HarvestAction, HarvestMessage, Journal, JournalSetting, SystemType};
pub use domain::ports::{DispatchObserver, QueueClient};
pub use utils::error::{QueueError, Result};
