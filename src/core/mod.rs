pub mod dispatcher;
pub mod observer;
pub mod producer;

pub use crate::domain::model::{HarvestAction, HarvestMessage, Journal, JournalSetting, SystemType};
pub use crate::domain::ports::{DispatchObserver, QueueClient};
pub use crate::utils::error::Result;
