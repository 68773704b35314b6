//! Deploy configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Name of the persisted identifier list inside the data directory.
pub const WORKFLOW_IDS_FILE: &str = "workflows_ids.json";

/// Configuration loaded from an optional TOML file and command-line overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    /// n8n API configuration.
    #[serde(default)]
    pub api: ApiConfig,
    /// Directory holding the persisted identifier list.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self { api: ApiConfig::default(), data_dir: default_data_dir() }
    }
}

impl DeployConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()?;
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("data_dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Path of the persisted identifier list.
    pub fn workflow_ids_path(&self) -> PathBuf {
        self.data_dir.join(WORKFLOW_IDS_FILE)
    }

    /// Apply values given on the command line (or via environment) over file values.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(host) = overrides.host {
            self.api.host = host;
        }
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = overrides.max_retries {
            self.api.max_retries = max_retries;
        }
    }
}

/// Values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<Url>,
    pub data_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

/// n8n API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the n8n instance.
    #[serde(default = "default_host")]
    pub host: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Maximum attempts per remote call. `1` disables retries.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.host.scheme(), "http" | "https") || self.host.cannot_be_a_base() {
            return Err(AppError::InvalidConfig(format!(
                "host must be an http(s) URL, got '{}'",
                self.host
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.max_retries == 0 {
            return Err(AppError::InvalidConfig("max_retries must be greater than 0".to_string()));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::InvalidConfig(
                "retry_delay_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_host() -> Url {
    Url::parse("http://localhost:5678").expect("Default host URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
