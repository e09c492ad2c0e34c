//! Client configuration.
//!
//! The only externally configurable value is the base URL of the stock
//! service. It is resolved, first match wins, from:
//!
//! 1. an explicit value (e.g. the CLI `--base-url` flag),
//! 2. the `ROOKIE_API_BASE_URL` process environment variable,
//! 3. `ROOKIE_API_BASE_URL` in a `.env` file found from the working directory,
//! 4. [`DEFAULT_BASE_URL`].
//!
//! The `.env` file is read without mutating the process environment.

use std::path::Path;

use thiserror::Error;

use crate::http_client::DEFAULT_TIMEOUT_MS;

pub const BASE_URL_ENV: &str = "ROOKIE_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("base url must be an absolute http(s) url: '{value}'")]
    InvalidBaseUrl { value: String },

    #[error("failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}

/// Settings injected into [`StockApiClient`](crate::StockApiClient) at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: String::from(concat!("rookie/", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            ..Self::default()
        })
    }

    /// Resolve the base URL from the explicit value, process env, `.env` file, then default.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = non_blank(explicit) {
            return Self::new(value);
        }

        let from_env = std::env::var(BASE_URL_ENV).ok();
        let from_file = match dotenvy::dotenv_iter() {
            Ok(iter) => lookup_base_url(iter)?,
            Err(error) if error.not_found() => None,
            Err(error) => return Err(error.into()),
        };

        Self::resolve_from(None, from_env.as_deref(), from_file.as_deref())
    }

    /// Pure resolution step shared by [`ClientConfig::resolve`] and tests.
    pub fn resolve_from(
        explicit: Option<&str>,
        from_env: Option<&str>,
        from_file: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base_url = non_blank(explicit)
            .or_else(|| non_blank(from_env))
            .or_else(|| non_blank(from_file))
            .unwrap_or(DEFAULT_BASE_URL);

        Self::new(base_url)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` (no leading slash) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Read `ROOKIE_API_BASE_URL` from a specific env file.
pub fn base_url_from_env_file(path: impl AsRef<Path>) -> Result<Option<String>, ConfigError> {
    let iter = dotenvy::from_path_iter(path.as_ref())?;
    lookup_base_url(iter)
}

fn lookup_base_url<I>(iter: I) -> Result<Option<String>, ConfigError>
where
    I: Iterator<Item = Result<(String, String), dotenvy::Error>>,
{
    for item in iter {
        let (key, value) = item?;
        if key == BASE_URL_ENV {
            return Ok(Some(value));
        }
    }
    Ok(None)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let valid = reqwest::Url::parse(trimmed)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);

    if !valid {
        return Err(ConfigError::InvalidBaseUrl {
            value: raw.to_owned(),
        });
    }

    Ok(trimmed.to_owned())
}
