use crate::defaults;
use crate::error::{LonghandError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub transcribe: TranscribeConfig,
}

/// Transcription API configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub url: String,
    pub key: Option<String>,
    pub model: String,
    pub language: Option<String>,
}

/// Splitting and output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranscribeConfig {
    pub max_upload_bytes: u64,
    pub chunk_seconds: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: defaults::API_URL.to_string(),
            key: None,
            model: defaults::MODEL.to_string(),
            language: None,
        }
    }
}

impl Default for TranscribeConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: defaults::MAX_UPLOAD_BYTES,
            chunk_seconds: defaults::CHUNK_SECONDS,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LonghandError::ConfigFileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                LonghandError::Io(e)
            }
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if the file doesn't exist
    ///
    /// Only a missing file falls back to defaults; invalid TOML is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(LonghandError::ConfigFileNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - LONGHAND_API_KEY → api.key
    /// - LONGHAND_API_URL → api.url
    /// - LONGHAND_MODEL → api.model
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("LONGHAND_API_KEY")
            && !key.is_empty()
        {
            self.api.key = Some(key);
        }

        if let Ok(url) = std::env::var("LONGHAND_API_URL")
            && !url.is_empty()
        {
            self.api.url = url;
        }

        if let Ok(model) = std::env::var("LONGHAND_MODEL")
            && !model.is_empty()
        {
            self.api.model = model;
        }

        self
    }

    /// Return the configured API key, or the configuration error explaining
    /// how to set one.
    pub fn require_key(&self) -> Result<&str> {
        match self.api.key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(LonghandError::ConfigInvalidValue {
                key: "api.key".to_string(),
                message: "no API key configured; set LONGHAND_API_KEY or api.key in config.toml"
                    .to_string(),
            }),
        }
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/longhand/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("longhand")
            .join("config.toml")
    }

    /// Annotated configuration template for `longhand config dump`.
    pub fn dump_template() -> String {
        format!(
            r#"# longhand configuration
# Location: ~/.config/longhand/config.toml

[api]
# Transcription endpoint (any OpenAI-compatible /audio/transcriptions URL)
url = "{url}"
# API key; LONGHAND_API_KEY overrides this
# key = "sk-..."
# Model identifier sent with each request
model = "{model}"
# Force a transcription language (ISO 639-1); omit to auto-detect
# language = "en"

[transcribe]
# Files larger than this are split before upload (bytes)
max_upload_bytes = {max_bytes}
# Nominal chunk length in seconds, also used for timestamp offsets
chunk_seconds = {chunk_secs}
"#,
            url = defaults::API_URL,
            model = defaults::MODEL,
            max_bytes = defaults::MAX_UPLOAD_BYTES,
            chunk_secs = defaults::CHUNK_SECONDS,
        )
    }
}
