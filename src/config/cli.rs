use crate::config::queue::QueueConfig;
use crate::config::toml_config::TomlConfig;
use crate::core::{Journal, JournalSetting};
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "journal-harvest-queue")]
#[command(about = "Queue a journal harvest request on SQS")]
pub struct CliConfig {
    /// Journal identifier, sent as `journal_key`
    #[arg(long)]
    pub journal_id: i64,

    /// Journal website, sent as `url`
    #[arg(long)]
    pub website: String,

    /// Journal system setting (ojs-oai, teckiz, doaj); omit for a journal without a setting
    #[arg(long)]
    pub system: Option<String>,

    /// Path to TOML configuration file; falls back to SQS_* environment variables
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Override the queue URL")]
    pub queue_url: Option<String>,

    #[arg(long, help = "Override the AWS region")]
    pub region: Option<String>,

    #[arg(long, help = "Fail on journal systems without a harvest integration")]
    pub strict: bool,

    #[arg(long, help = "Print the message body without sending it")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn journal(&self) -> Journal {
        let journal = Journal::new(self.journal_id, self.website.clone());
        match &self.system {
            Some(system) => journal.with_setting(JournalSetting::new(system.clone())),
            None => journal,
        }
    }

    /// 設定來源優先序：命令列 > TOML 檔案 > 環境變數
    pub fn queue_config(&self) -> Result<QueueConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?
                .to_queue_config_with_queue_url(self.queue_url.as_deref())?,
            None => QueueConfig::from_env_with_queue_url(self.queue_url.as_deref())?,
        };

        if let Some(url) = &self.queue_url {
            config.queue_url = url.clone();
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if self.strict {
            config.strict_systems = true;
        }

        Ok(config)
    }
}
