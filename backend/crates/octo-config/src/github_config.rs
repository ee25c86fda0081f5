use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GITHUB_API_BASE_URL, DEFAULT_GITHUB_TIMEOUT_SECS,
    DEFAULT_GITHUB_TOKEN_URL, DEFAULT_NOREPLY_DOMAIN, MAX_GITHUB_TIMEOUT_SECS,
    MIN_GITHUB_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// OAuth app credentials and endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub api_base_url: String,
    /// Per-request timeout for every outbound call
    pub timeout_secs: u64,
    /// Domain used in synthesized `users.noreply` addresses
    pub noreply_domain: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_url: String::from(DEFAULT_GITHUB_TOKEN_URL),
            api_base_url: String::from(DEFAULT_GITHUB_API_BASE_URL),
            timeout_secs: DEFAULT_GITHUB_TIMEOUT_SECS,
            noreply_domain: String::from(DEFAULT_NOREPLY_DOMAIN),
        }
    }
}

impl GitHubConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.client_id.trim().is_empty() {
            return Err(ConfigError::github("github.client_id is required"));
        }

        if self.client_secret.trim().is_empty() {
            return Err(ConfigError::github("github.client_secret is required"));
        }

        for (name, url) in [
            ("github.token_url", &self.token_url),
            ("github.api_base_url", &self.api_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::github(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        if !(MIN_GITHUB_TIMEOUT_SECS..=MAX_GITHUB_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::github(format!(
                "github.timeout_secs must be {}-{}, got {}",
                MIN_GITHUB_TIMEOUT_SECS, MAX_GITHUB_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.noreply_domain.trim().is_empty() {
            return Err(ConfigError::github("github.noreply_domain cannot be empty"));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
