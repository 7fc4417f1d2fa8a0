use crate::config::queue::{QueueConfig, DEFAULT_REGION};
use crate::utils::error::{QueueError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub queue: QueueSection,
    pub credentials: Option<CredentialsSection>,
    pub dispatch: Option<DispatchSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueSection {
    pub url: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsSection {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for CredentialsSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsSection")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "***"))
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchSection {
    pub strict_systems: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QueueError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QueueError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SQS_SECRET_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QueueError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn strict_systems(&self) -> bool {
        self.dispatch
            .as_ref()
            .and_then(|d| d.strict_systems)
            .unwrap_or(false)
    }

    /// 轉成執行期使用的 [`QueueConfig`]
    pub fn to_queue_config(&self) -> Result<QueueConfig> {
        self.to_queue_config_with_queue_url(None)
    }

    /// Same as [`TomlConfig::to_queue_config`], using `queue_url` when the
    /// file has no `queue.url`.
    pub fn to_queue_config_with_queue_url(&self, queue_url: Option<&str>) -> Result<QueueConfig> {
        let fallback = queue_url.map(str::to_string);
        let queue_url = match &self.queue.url {
            Some(url) => url,
            None => validate_required_field("queue.url", &fallback)?,
        };
        let credentials = self.credentials.clone().unwrap_or_default();

        Ok(QueueConfig {
            region: self
                .queue
                .region
                .clone()
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            queue_url: queue_url.clone(),
            access_key: credentials.access_key,
            secret_key: credentials.secret_key,
            session_token: credentials.session_token,
            endpoint_url: self.queue.endpoint_url.clone(),
            timeout_seconds: self.queue.timeout_seconds,
            strict_systems: self.strict_systems(),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.to_queue_config()?.validate()
    }
}
