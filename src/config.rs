//! Runtime configuration read from the environment.

use std::{ops::Range, str::FromStr, time::Duration};

use crate::{error::ConfigError, service::retry::RetryPolicy};

pub const DEFAULT_SWAPI_URL: &str = "https://swapi.py4e.com/api";
pub const DEFAULT_ID_START: i64 = 1;
pub const DEFAULT_ID_END: i64 = 84;
pub const DEFAULT_CHUNK_SIZE: usize = 5;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub swapi_url: String,
    /// First person ID to load (inclusive)
    pub id_start: i64,
    /// Upper bound of the ID range (exclusive)
    pub id_end: i64,
    pub chunk_size: usize,
    /// Per-request timeout in seconds, `0` disables it
    pub http_timeout_secs: u64,
    pub max_fetch_attempts: u32,
    pub initial_backoff_ms: u64,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let swapi_url = lookup("SWAPI_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SWAPI_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let config = Self {
            database_url,
            swapi_url,
            id_start: parse_or(&lookup, "SWAPI_ID_START", DEFAULT_ID_START)?,
            id_end: parse_or(&lookup, "SWAPI_ID_END", DEFAULT_ID_END)?,
            chunk_size: parse_or(&lookup, "SWAPI_CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?,
            http_timeout_secs: parse_or(
                &lookup,
                "SWAPI_HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?,
            max_fetch_attempts: parse_or(
                &lookup,
                "SWAPI_MAX_FETCH_ATTEMPTS",
                RetryPolicy::DEFAULT_MAX_ATTEMPTS,
            )?,
            initial_backoff_ms: parse_or(
                &lookup,
                "SWAPI_INITIAL_BACKOFF_MS",
                RetryPolicy::DEFAULT_INITIAL_BACKOFF.as_millis() as u64,
            )?,
            user_agent: format!(
                "{}/{} ({})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION")
            ),
        };

        config.validate()?;

        Ok(config)
    }

    /// Person IDs to load
    pub fn id_range(&self) -> Range<i64> {
        self.id_start..self.id_end
    }

    /// Per-request timeout, `None` when disabled
    pub fn http_timeout(&self) -> Option<Duration> {
        (self.http_timeout_secs > 0).then(|| Duration::from_secs(self.http_timeout_secs))
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_fetch_attempts,
            Duration::from_millis(self.initial_backoff_ms),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |var: &str, reason: &str| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: reason.to_string(),
        };

        if self.id_start < 0 {
            return Err(invalid("SWAPI_ID_START", "must not be negative"));
        }
        if self.id_end < self.id_start {
            return Err(invalid(
                "SWAPI_ID_END",
                "must not be lower than SWAPI_ID_START",
            ));
        }
        if self.chunk_size == 0 {
            return Err(invalid("SWAPI_CHUNK_SIZE", "must be greater than 0"));
        }
        if self.max_fetch_attempts == 0 {
            return Err(invalid("SWAPI_MAX_FETCH_ATTEMPTS", "must be greater than 0"));
        }

        Ok(())
    }
}

fn parse_or<L, T>(lookup: &L, var: &str, default: T) -> Result<T, ConfigError>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
        }
        _ => Ok(default),
    }
}
