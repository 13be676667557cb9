//! Application configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{ClientError, Result};
use crate::session::PayloadSource;

/// Payload sent by literal mode when the config file does not override it
pub const DEFAULT_LITERAL_TEXT: &str = "G01 X10 Y10 F1000";
/// Port used by literal mode when the config file does not override it
pub const DEFAULT_LITERAL_PORT: &str = "COM3";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Payload configuration
    pub payload: PayloadConfig,
}

/// Payload-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// Send the literal test payload instead of the form values
    pub use_literal: bool,
    /// Literal test payload
    pub literal_text: String,
    /// Literal test port
    pub literal_port: String,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            use_literal: false,
            literal_text: DEFAULT_LITERAL_TEXT.to_string(),
            literal_port: DEFAULT_LITERAL_PORT.to_string(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/cncsend/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present, otherwise built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    log::debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Payload source selected by this configuration
    pub fn payload_source(&self) -> PayloadSource {
        if self.payload.use_literal {
            PayloadSource::Literal {
                text: self.payload.literal_text.clone(),
                port: self.payload.literal_port.clone(),
            }
        } else {
            PayloadSource::Form
        }
    }
}
