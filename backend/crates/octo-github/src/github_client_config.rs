use std::time::Duration;

pub const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings injected into [`GitHubClient`](crate::GitHubClient) at construction
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    pub client_id: String,
    pub client_secret: String,
    /// OAuth token endpoint
    pub token_url: String,
    /// REST API root, without trailing slash
    pub api_base_url: String,
    /// Applied to every outbound request
    pub timeout: Duration,
    pub user_agent: String,
}

impl GitHubClientConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: String::from(DEFAULT_TOKEN_URL),
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("octo-link/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_api_base_url(mut self, api_base_url: &str) -> Self {
        self.api_base_url = api_base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
