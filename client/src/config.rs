//! Client configuration loaded via OrthoConfig.
//!
//! Values come from `SPORTHUB_*` environment variables or a configuration
//! file discovered by OrthoConfig; command-line flags are handled by the CLI.

use std::ffi::OsString;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::checkout::DEFAULT_CHECKOUT_BASE_URL;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_STATE_DIR: &str = ".sporthub";

/// Errors raised while interpreting configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration could not be loaded: {0}")]
    Load(String),
    #[error("{field} is not a valid URL: {message}")]
    InvalidUrl { field: &'static str, message: String },
}

/// Settings controlling where the client talks to and keeps its state.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SPORTHUB")]
pub struct ClientSettings {
    /// Base URL of the SportHub API.
    pub api_base_url: Option<String>,
    /// Directory holding the persisted token.
    pub state_dir: Option<PathBuf>,
    /// Base URL of the hosted checkout page.
    pub checkout_base_url: Option<String>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub json_logs: bool,
}

impl ClientSettings {
    /// Load settings from the environment and configuration files only.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_iter([OsString::from("sporthub")])
            .map_err(|err| ConfigError::Load(err.to_string()))
    }

    /// Configured API base, falling back to the local development server.
    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        parse_url(
            "api_base_url",
            self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL),
        )
    }

    /// Configured state directory, falling back to `.sporthub`.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
    }

    /// Configured checkout base, falling back to the hosted provider page.
    pub fn checkout_base_url(&self) -> Result<Url, ConfigError> {
        parse_url(
            "checkout_base_url",
            self.checkout_base_url
                .as_deref()
                .unwrap_or(DEFAULT_CHECKOUT_BASE_URL),
        )
    }
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|err| ConfigError::InvalidUrl {
        field,
        message: err.to_string(),
    })
}
