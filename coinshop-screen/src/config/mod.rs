//! Configuration module for coinshop-screen.
//!
//! Handles loading configuration from a TOML file and CLI overrides.

pub mod file;

use crate::config::file::FileConfig;
use coinshop_sdk::config::ApiConfig;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: std::path::PathBuf,
    base_url_override: Option<Url>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, base_url_override: Option<Url>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            base_url_override,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file, or fall back to defaults if it does not exist
    /// 2. Apply CLI overrides
    /// 3. Validate the configuration
    pub fn load(&self) -> Result<ApiConfig, ConfigError> {
        let file_config = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.config_path.display(),
                    "Config file not found, using defaults"
                );
                FileConfig::default()
            }
            Err(e) => return Err(e.into()),
        };

        self.build(file_config)
    }

    fn build(&self, file_config: FileConfig) -> Result<ApiConfig, ConfigError> {
        let base_url = match &self.base_url_override {
            Some(url) => url.clone(),
            None => file_config.api.parsed_base_url().map_err(|source| {
                ConfigError::InvalidBaseUrl {
                    url: file_config.api.base_url.clone(),
                    source,
                }
            })?,
        };

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError(format!(
                "base url must be http or https, got {}",
                base_url.scheme()
            )));
        }

        let mut config = ApiConfig::new(base_url);
        match file_config.api.timeout_secs {
            Some(0) => {
                return Err(ConfigError::ValidationError(
                    "timeout_secs must be greater than zero".to_string(),
                ));
            }
            Some(secs) => config = config.with_timeout(Duration::from_secs(secs)),
            None => {}
        }
        Ok(config)
    }
}
