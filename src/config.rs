//! Configuration handling for the site widgets
//!
//! The backend base URL is read once at startup and used to build the
//! demo request endpoint.

use crate::error::ConfigError;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default backend base URL
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";

/// Default timeout for the demo request call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Environment variable overriding the backend base URL
pub const BACKEND_URL_ENV: &str = "AXALON_BACKEND_URL";

/// Environment variable overriding the request timeout, in seconds
pub const REQUEST_TIMEOUT_ENV: &str = "AXALON_REQUEST_TIMEOUT_SECS";

/// Path of the demo request endpoint relative to the base URL
const DEMO_REQUESTS_PATH: &str = "/api/demo-requests";

/// User configuration for the site widgets
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Backend base URL
    pub backend_url: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "axalonsystems", "axalon-site")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path().as_deref(), |key| std::env::var(key).ok())
    }

    fn load_from(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(env(BACKEND_URL_ENV), env(REQUEST_TIMEOUT_ENV))?;
        config.validate()?;
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply values taken from the environment (blank values are ignored)
    fn apply_overrides(
        &mut self,
        backend_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.backend_url = Some(url.trim().to_string());
        }
        if let Some(raw) = timeout_secs.filter(|t| !t.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            self.request_timeout_secs = Some(secs);
        }
        Ok(())
    }

    /// Check the base URL and timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.backend_url();
        match reqwest::Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigError::InvalidBackendUrl {
                    url: url.to_string(),
                    reason: format!("unsupported scheme {:?}", parsed.scheme()),
                })
            }
            Err(e) => {
                return Err(ConfigError::InvalidBackendUrl {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
            }
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout("0".to_string()));
        }
        Ok(())
    }

    /// Backend base URL, falling back to the default
    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Full URL of the demo request endpoint
    pub fn demo_requests_url(&self) -> String {
        format!(
            "{}{}",
            self.backend_url().trim_end_matches('/'),
            DEMO_REQUESTS_PATH
        )
    }

    /// Timeout applied to the demo request call
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }
}
