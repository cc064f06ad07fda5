//! # configs
//!
//! Layered runtime settings for the review service.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `config/{REVIEWS_ENV}.toml` (optional, `REVIEWS_ENV` defaults to `development`)
//! 4. `REVIEWS__SECTION__KEY` environment variables (e.g. `REVIEWS__SEED__PATH`)
//! 5. the bare `PORT` variable, for hosts that inject it
//!
//! A `.env` file in the working directory is read first via `dotenvy`.

use std::path::PathBuf;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub seed: SeedSettings,
    #[serde(default)]
    pub sentiment: SentimentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSettings {
    /// CSV file with `ReviewId,Location,Timestamp,ReviewBody` columns.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentSettings {
    /// Optional VADER-format lexicon merged over the built-in words.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set.
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Settings {
    /// Loads settings from every source listed in the module docs.
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), ".env loaded");
        }
        let env = std::env::var("REVIEWS_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix("REVIEWS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        Self::from_builder(builder)
    }

    /// Builder pre-populated with the built-in defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        Ok(config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("seed.path", "data/reviews.csv")?
            .set_default("logging.filter", "info")?
            .set_default("logging.format", "pretty")?)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.server.port == 0 {
            return Err(SettingsError::Invalid(
                "server.port must be greater than 0".into(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(SettingsError::Invalid("server.host must not be empty".into()));
        }
        if self.seed.path.as_os_str().is_empty() {
            return Err(SettingsError::Invalid("seed.path must not be empty".into()));
        }
        Ok(())
    }
}
