//! Configuration for the registration intake.

use crate::error::GENERIC_FAILURE_MESSAGE;
use anyhow::{Context, Result};
use serde::Deserialize;

/// Intake configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeConfig {
    /// Status indicator configuration
    #[serde(default)]
    pub status: StatusConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    /// Message shown for any rejected submission
    #[serde(default = "default_failure_message")]
    pub failure_message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level, used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

// Default implementations
impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            failure_message: default_failure_message(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// Default value functions
fn default_failure_message() -> String {
    GENERIC_FAILURE_MESSAGE.into()
}

fn default_log_level() -> String {
    "info".into()
}

impl IntakeConfig {
    /// Load configuration from `INTAKE__*` environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(
            config::Environment::with_prefix("INTAKE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(false),
        )
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
