//! Runtime configuration.
//!
//! Built from defaults, then overridden by environment variables:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `KONYHA_BASE_URL` | `base_url` | `https://staging.sinkoangi.hu` |
//! | `KONYHA_DATA_DIR` | `data_dir` | `<platform data dir>/konyhanyelv` |
//! | `KONYHA_LOG` | `log_filter` | `info` |
//! | `KONYHA_TIMEOUT_SECS` | `request_timeout` | `15` |

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Site the client talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://staging.sinkoangi.hu";

/// Directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "konyhanyelv";

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration problems detected at startup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("base URL must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("could not determine a data directory; set KONYHA_DATA_DIR")]
    NoDataDir,

    #[error("KONYHA_TIMEOUT_SECS must be a positive whole number, got '{0}'")]
    InvalidTimeout(String),
}

/// Application configuration.
///
/// ```ignore
/// use konyhanyelv::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_base_url("http://localhost:8080")
///     .with_request_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// WordPress site root, without trailing slash
    pub base_url: String,
    /// Where `store.json` and the log file live
    pub data_dir: PathBuf,
    /// `EnvFilter` directive for the file logger
    pub log_filter: String,
    /// Per-request timeout for the content API
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: default_data_dir().unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME)),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the site root. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("KONYHA_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        match lookup("KONYHA_DATA_DIR").filter(|v| !v.trim().is_empty()) {
            Some(dir) => config = config.with_data_dir(dir),
            None if default_data_dir().is_none() => return Err(ConfigError::NoDataDir),
            None => {}
        }

        if let Some(filter) = lookup("KONYHA_LOG").filter(|v| !v.trim().is_empty()) {
            config = config.with_log_filter(filter);
        }

        if let Some(raw) = lookup("KONYHA_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Log file path inside the data dir.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.log", APP_DIR_NAME))
    }
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME))
}
