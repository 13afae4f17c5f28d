use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/translations";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub api_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("TRANSLATIONS_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let request_timeout_secs = match std::env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .context(format!("REQUEST_TIMEOUT_SECS is not a number: {}", raw))?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let config = Self {
            api_url,
            request_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the gateway could never work with.
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.api_url)
            .context(format!("Invalid backend URL: {}", self.api_url))?;

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be greater than zero");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
