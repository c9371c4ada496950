use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// How long a notice banner stays up
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u64,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Overrides `<config_dir>/leavedesk/logs`
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    leave_api::DEFAULT_BASE_URL.to_string()
}

fn default_notice_timeout_ms() -> u64 {
    4200
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            notice_timeout_ms: default_notice_timeout_ms(),
            request_timeout_secs: None,
            log_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from `leavedesk.toml` (or `$LEAVEDESK_CONFIG`) and
    /// `LEAVEDESK__*` environment variables, in that order of precedence.
    pub fn new() -> Result<Self, SettingsError> {
        let config_path =
            std::env::var("LEAVEDESK_CONFIG").unwrap_or_else(|_| "leavedesk.toml".to_string());

        let settings: Settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(Environment::with_prefix("LEAVEDESK").separator("__"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.api_base_url.is_empty() {
            return Err(SettingsError::Invalid("api_base_url is required".to_string()));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(SettingsError::Invalid(
                "api_base_url must be a valid HTTP(S) URL".to_string(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(SettingsError::Invalid(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(self.notice_timeout_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
