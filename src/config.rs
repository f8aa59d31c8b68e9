//! Configuration handling for the TUI

use crate::api::ApiClient;
use crate::state::ErrorDisplay;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "TRIVIA_API_URL";

/// Default API base URL (Flask development server)
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Log file name inside the platform data directory
pub const LOG_FILE_NAME: &str = "trivia-form-tui.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "trivia", "trivia-form-tui")
}

/// Where logs are written while the terminal UI owns the screen
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating missing parent directories
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Trivia API base URL
    pub api_base_url: Option<String>,
    /// Show request failures as a dialog or as an inline banner
    pub error_display: Option<ErrorDisplay>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Base URL to use, preferring `env_override` over the file setting
    pub fn resolve_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    /// Base URL from the environment, the config file, or the default
    pub fn base_url(&self) -> String {
        self.resolve_base_url(std::env::var(API_URL_ENV).ok())
    }

    pub fn error_display(&self) -> ErrorDisplay {
        self.error_display.unwrap_or_default()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Build an API client from this configuration
    pub fn api_client(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(&self.base_url(), self.request_timeout())?)
    }
}
