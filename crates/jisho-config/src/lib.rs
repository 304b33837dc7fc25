use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::api::ApiConfig;

pub mod api;

/// Maximum number of results to show in Alfred
pub const MAX_NUM_RESULTS: usize = 50;

fn default_max_results() -> usize {
    MAX_NUM_RESULTS
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Fallback tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            max_results: default_max_results(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Build config from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup, missing keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api = ApiConfig::from_lookup(&lookup)?;

        // Zero would hide every result behind the "not found" row
        let max_results = parse_var::<_, NonZeroUsize>(&lookup, "JISHO_MAX_RESULTS")?
            .map_or(MAX_NUM_RESULTS, NonZeroUsize::get);

        let log_level = lookup("JISHO_LOG").unwrap_or_else(default_log_level);

        Ok(Config {
            api,
            max_results,
            log_level,
        })
    }
}

pub(crate) fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
    }
}
