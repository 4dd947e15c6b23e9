use serde::Deserialize;
use service_core::config::{self as core_config, env_var};
use service_core::error::AppError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub log_level: String,
    /// OTLP collector endpoint. Span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl NotificationConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(NotificationConfig {
            common: common_config,
            log_level: env_var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            otlp_endpoint: env_var("OTLP_ENDPOINT"),
        })
    }

    pub fn environment(&self) -> &str {
        self.common.environment()
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            otlp_endpoint: None,
        }
    }
}
