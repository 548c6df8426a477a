//! Geocoding configuration: API key, base URL, and per-request settings.
//!
//! Resolution order per field: explicit value (CLI flag or its env var),
//! then `./.env`, then `~/.geolatlong/config.json`, then the built-in default.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/geo/1.0/";
pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_LIMIT: u32 = 1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const ENV_API_KEY: &str = "API_KEY";
const ENV_BASE_URL: &str = "GEO_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key configured; pass --api-key, set API_KEY, or add it to .env")]
    MissingApiKey,
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid .env file {}: {source}", .path.display())]
    Dotenv {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

/// Settings the geocode client is constructed with.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: String,
    /// Always ends with '/'.
    pub base_url: String,
    /// Country suffix for ZIP lookups ("zip=10001,US").
    pub country: String,
    pub limit: u32,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            limit: DEFAULT_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `limit=..&appid=..`, appended to every request. The key is
    /// percent-encoded, so it only ever contains `[A-Za-z0-9%]`.
    pub fn query_suffix(&self) -> String {
        format!(
            "limit={}&appid={}",
            self.limit,
            utf8_percent_encode(&self.api_key, NON_ALPHANUMERIC)
        )
    }
}

/// Values supplied on the command line (or through clap's env fallbacks).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

/// Optional user-level config at ~/.geolatlong/config.json.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    base_url: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    limit: Option<u32>,
}

/// Where configuration files are looked up.
#[derive(Debug, Clone)]
pub struct Sources {
    pub dotenv: PathBuf,
    pub user_config: Option<PathBuf>,
}

impl Sources {
    /// `./.env` and `~/.geolatlong/config.json`.
    pub fn standard() -> Self {
        Self {
            dotenv: PathBuf::from(".env"),
            user_config: dirs::home_dir().map(|h| h.join(".geolatlong").join("config.json")),
        }
    }
}

/// Build a `Config` from overrides and the files in `sources`.
///
/// Missing files are skipped. An unreadable or malformed user config is an error.
pub fn load(overrides: Overrides, sources: &Sources) -> Result<Config, ConfigError> {
    let dotenv = read_dotenv(&sources.dotenv)?;
    let file = match &sources.user_config {
        Some(path) => read_user_config(path)?,
        None => FileConfig::default(),
    };

    let api_key = overrides
        .api_key
        .or_else(|| dotenv.get(ENV_API_KEY).cloned())
        .or(file.api_key)
        .filter(|k| !k.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    let base_url = overrides
        .base_url
        .or_else(|| dotenv.get(ENV_BASE_URL).cloned())
        .or(file.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let mut config = Config::new(api_key).with_base_url(base_url);
    if let Some(country) = file.country {
        config.country = country;
    }
    if let Some(limit) = file.limit {
        config.limit = limit;
    }
    if let Some(timeout) = overrides.timeout {
        config = config.with_timeout(timeout);
    }
    tracing::debug!(base_url = %config.base_url, country = %config.country, "configuration loaded");
    Ok(config)
}

fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn read_user_config(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read `.env` entries without touching the process environment.
fn read_dotenv(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let dotenv_error = |source| ConfigError::Dotenv {
        path: path.to_path_buf(),
        source,
    };
    dotenvy::from_path_iter(path)
        .map_err(dotenv_error)?
        .map(|item| item.map_err(dotenv_error))
        .collect()
}
