use secrecy::SecretString;
use std::env;
use std::time::Duration;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<SecretString>,
    pub child_id: Option<i64>,
    pub submit_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source. Blank and unparsable
    /// values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            api_url: present("BRIGHTBOOK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: present("BRIGHTBOOK_API_TOKEN").map(SecretString::from),
            child_id: present("BRIGHTBOOK_CHILD_ID").and_then(|id| id.trim().parse().ok()),
            submit_timeout_secs: present("BRIGHTBOOK_SUBMIT_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_SUBMIT_TIMEOUT_SECS),
            rust_log: present("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    /// Base URL without a trailing slash, so endpoint paths can be appended.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Rejects settings that only make sense against a local development API.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::ConfigurationError(format!(
                "BRIGHTBOOK_API_URL must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }

        if self.api_token.is_none() {
            return Err(AppError::ConfigurationError(
                "BRIGHTBOOK_API_TOKEN must be set".to_string(),
            ));
        }

        Ok(())
    }

    pub fn test_config() -> Self {
        Self {
            api_url: "http://127.0.0.1:8000".to_string(),
            api_token: Some(SecretString::from("test_api_token".to_string())),
            child_id: Some(7),
            submit_timeout_secs: 2,
            rust_log: "error".to_string(),
        }
    }
}
