use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Error;

/// Configuration for the external HTML-to-PDF converter.
///
/// The binary location is resolved once at process start (CLI flag, env var,
/// or config file) and injected from there; nothing else in the codebase
/// hard-codes a converter path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Path to the wkhtmltopdf binary (or anything CLI-compatible with it)
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Pass `--enable-local-file-access` so the rendered HTML may reference
    /// local assets (stylesheet, fonts) via file:// URLs during conversion
    #[serde(default = "default_true")]
    pub enable_local_file_access: bool,

    /// Pass `--quiet` to suppress converter progress output on stderr
    #[serde(default = "default_true")]
    pub quiet: bool,
}

fn default_binary() -> PathBuf {
    PathBuf::from("wkhtmltopdf")
}

const fn default_true() -> bool {
    true
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            enable_local_file_access: true,
            quiet: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Converter configuration
    #[serde(default)]
    pub converter: ConverterConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| Error::ConfigLoad(format!("Failed to parse config: {e}")))
    }

    /// Load from `./resume-maker.toml` if present, otherwise defaults
    pub fn load() -> Self {
        let local_config = std::path::PathBuf::from("resume-maker.toml");
        if local_config.exists() {
            match Self::from_file(&local_config) {
                Ok(config) => {
                    tracing::debug!("Loaded config from ./resume-maker.toml");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load ./resume-maker.toml: {}", e);
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Self::default()
    }
}
