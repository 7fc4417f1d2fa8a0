use crate::utils::error::{QueueError, Result};
use crate::utils::validation::{
    validate_aws_region, validate_credential_pair, validate_range, validate_url, Validate,
};
use std::env;
use std::fmt;

pub const DEFAULT_REGION: &str = "ap-southeast-2";

/// Queue endpoint identity and credentials. Built once and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct QueueConfig {
    pub region: String,
    pub queue_url: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub session_token: Option<String>,
    pub endpoint_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub strict_systems: bool,
}

impl QueueConfig {
    pub fn new(region: impl Into<String>, queue_url: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            queue_url: queue_url.into(),
            access_key: None,
            secret_key: None,
            session_token: None,
            endpoint_url: None,
            timeout_seconds: None,
            strict_systems: false,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_env_with_queue_url(None)
    }

    /// Same as [`QueueConfig::from_env`], using `queue_url` when
    /// `SQS_QUEUE_URL` is not set.
    pub fn from_env_with_queue_url(queue_url: Option<&str>) -> Result<Self> {
        let queue_url = non_empty_var("SQS_QUEUE_URL")
            .or_else(|| queue_url.map(str::to_string))
            .ok_or_else(|| QueueError::MissingConfigError {
                field: "SQS_QUEUE_URL".to_string(),
            })?;

        Ok(Self {
            region: non_empty_var("SQS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            queue_url,
            access_key: non_empty_var("SQS_ACCESS_KEY"),
            secret_key: non_empty_var("SQS_SECRET_KEY"),
            session_token: non_empty_var("SQS_SESSION_TOKEN"),
            endpoint_url: non_empty_var("SQS_ENDPOINT_URL"),
            timeout_seconds: match non_empty_var("SQS_TIMEOUT_SECONDS") {
                Some(raw) => Some(raw.trim().parse().map_err(|_| {
                    QueueError::InvalidConfigValueError {
                        field: "SQS_TIMEOUT_SECONDS".to_string(),
                        value: raw.clone(),
                        reason: "Value must be a whole number of seconds".to_string(),
                    }
                })?),
                None => None,
            },
            strict_systems: env::var("STRICT_SYSTEMS")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }

    pub fn has_static_credentials(&self) -> bool {
        self.access_key.is_some() && self.secret_key.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl fmt::Debug for QueueConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueConfig")
            .field("region", &self.region)
            .field("queue_url", &self.queue_url)
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .field("endpoint_url", &self.endpoint_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("strict_systems", &self.strict_systems)
            .finish()
    }
}

impl Validate for QueueConfig {
    fn validate(&self) -> Result<()> {
        // 驗證佇列 URL
        validate_url("queue_url", &self.queue_url)?;

        // 驗證區域
        validate_aws_region("region", &self.region)?;

        validate_credential_pair(
            "credentials",
            self.access_key.as_deref(),
            self.secret_key.as_deref(),
        )?;

        if let Some(endpoint) = &self.endpoint_url {
            validate_url("endpoint_url", endpoint)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }

        tracing::debug!("✅ Queue configuration validation passed");
        Ok(())
    }
}
