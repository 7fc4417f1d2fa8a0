#[cfg(feature = "cli")]
pub mod cli;
pub mod queue;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use queue::QueueConfig;
pub use toml_config::TomlConfig;
