//! Configuration management for the Calma client
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::cli::Cli;
use crate::error::{CalmaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable overriding the cookie-jar location (used by tests)
pub const COOKIE_JAR_ENV: &str = "CALMA_COOKIE_JAR";

/// Main configuration structure for the Calma client
///
/// Holds everything needed to talk to the backend: the API endpoint
/// settings and the interactive chat behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Interactive chat settings
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend REST API, including the `/api` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

/// Interactive chat settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Display name of the support assistant
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Print the assistant's analysis (tone, topics, detected mood) with replies
    #[serde(default)]
    pub show_analysis: bool,

    /// Pre-fill the prompt with the unsent text after a failed send
    #[serde(default = "default_true")]
    pub restore_input_on_failure: bool,
}

fn default_assistant_name() -> String {
    "Calma".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            show_analysis: false,
            restore_input_on_failure: default_true(),
        }
    }
}

impl Config {
    /// Load configuration, merging file contents with CLI overrides
    ///
    /// Order of precedence, lowest to highest: built-in defaults, the YAML
    /// config file (when present), the `CALMA_API_URL` environment variable
    /// or `--api-url` flag (clap resolves both into `cli.api_url`).
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed command-line arguments carrying overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&contents)
                .map_err(|e| CalmaError::Config(format!("Failed to parse {}: {}", path, e)))?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path);
            Self::default()
        };

        if let Some(api_url) = &cli.api_url {
            tracing::debug!("Overriding API base URL: {}", api_url);
            config.api.base_url = api_url.clone();
        }

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is not a valid absolute URL or the
    /// timeout is zero
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.base_url).map_err(|e| {
            CalmaError::Config(format!("Invalid API base URL '{}': {}", self.api.base_url, e))
        })?;

        if self.api.timeout_seconds == 0 {
            return Err(CalmaError::Config("timeout_seconds must be positive".to_string()).into());
        }

        if self.chat.assistant_name.trim().is_empty() {
            return Err(CalmaError::Config("assistant_name must not be empty".to_string()).into());
        }

        Ok(())
    }

    /// Default location of the config file under the user's config directory
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "calma")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .unwrap_or_else(|| PathBuf::from("config.yaml"))
    }
}

/// Location of the persisted session cookie
///
/// Honors the `CALMA_COOKIE_JAR` environment variable so tests can point
/// the client at a scratch file; otherwise uses the user state directory.
pub fn cookie_jar_path() -> PathBuf {
    if let Ok(path) = std::env::var(COOKIE_JAR_ENV) {
        return PathBuf::from(path);
    }

    directories::ProjectDirs::from("", "", "calma")
        .map(|dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("session-cookie")
        })
        .unwrap_or_else(|| PathBuf::from(".calma-session-cookie"))
}
