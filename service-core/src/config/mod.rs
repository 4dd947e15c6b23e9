use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::env;

pub const DEFAULT_PORT: u16 = 3005;
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Deployment environment flag as configured. `None` when it was never set.
    #[serde(default)]
    pub environment: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            environment: None,
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional `configuration` file,
    /// `APP__*` variables and finally the plain `PORT` / `ENVIRONMENT` variables.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let environment = env_var("ENVIRONMENT").or_else(|| env_var("NODE_ENV"));

        let config = Cfg::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", env_var("PORT"))?
            .set_override_option("environment", environment)?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Environment name for display, `development` when the flag is unset.
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    /// True only when the flag is explicitly `development`.
    pub fn is_development(&self) -> bool {
        self.environment.as_deref() == Some(DEFAULT_ENVIRONMENT)
    }
}

/// Read an environment variable, treating an empty value the same as an unset one.
pub fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
