use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum QueueError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Unsupported journal system: {system}")]
    UnsupportedSystem { system: String },

    #[error("Failed to publish message to {queue_url}")]
    PublishError {
        queue_url: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl QueueError {
    pub fn configuration(message: impl Into<String>) -> Self {
        QueueError::ConfigurationError {
            message: message.into(),
        }
    }

    /// 只有送出失敗可以由呼叫端重試，本身不做重試
    pub fn is_retryable(&self) -> bool {
        matches!(self, QueueError::PublishError { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            QueueError::ConfigurationError { .. }
                | QueueError::UnsupportedSystem { .. }
                | QueueError::InvalidConfigValueError { .. }
                | QueueError::MissingConfigError { .. }
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QueueError::ConfigurationError { .. } => {
                "Make sure the journal has a setting with a non-empty system value"
            }
            QueueError::UnsupportedSystem { .. } => {
                "Use one of ojs-oai, teckiz or doaj, or disable strict_systems"
            }
            QueueError::PublishError { .. } => {
                "Check the queue URL, region and credentials, then try again"
            }
            QueueError::InvalidConfigValueError { .. } | QueueError::MissingConfigError { .. } => {
                "Fix the configuration file or SQS_* environment variables"
            }
            QueueError::SerializationError(_) => "The message body could not be encoded as JSON",
            QueueError::IoError(_) => "Check that the configuration file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QueueError::PublishError { queue_url, .. } => {
                format!("Could not send the harvest message to {}", queue_url)
            }
            QueueError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueueError>;
