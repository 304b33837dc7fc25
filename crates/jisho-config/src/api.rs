use serde::{Deserialize, Serialize};

use crate::{ConfigError, parse_var};

pub const DEFAULT_API_URL: &str = "https://jisho.org/api/v1/search/words";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("jisho-alfred/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for the remote dictionary endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base search endpoint, `keyword` is appended as a query parameter
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Request timeout. `None` keeps the HTTP client default
    pub timeout_seconds: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("JISHO_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_api_url);

        let timeout_seconds = parse_var(lookup, "JISHO_TIMEOUT_SECONDS")?;

        let user_agent = lookup("JISHO_USER_AGENT").unwrap_or_else(default_user_agent);

        Ok(Self {
            url,
            timeout_seconds,
            user_agent,
        })
    }
}
