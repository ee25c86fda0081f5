//! HTTP client for the GitHub OAuth and REST endpoints.

use crate::{
    AccessToken, GitHubClientConfig, IdentityProvider, OAuthError, Result as OAuthErrorResult,
    github_user::GitHubUser,
};

use octo_core::{EmailRecord, ExternalIdentity};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, header};
use serde::{Deserialize, Serialize};

const GITHUB_JSON: &str = "application/vnd.github+json";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Identity Exchange Client for GitHub
#[derive(Clone)]
pub struct GitHubClient {
    config: GitHubClientConfig,
    client: ReqwestClient,
}

impl GitHubClient {
    #[track_caller]
    pub fn new(config: GitHubClientConfig) -> OAuthErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| OAuthError::ClientBuild {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
                source: e,
            })?;

        Ok(Self { config, client })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    fn api_get(&self, path: &str, token: &AccessToken) -> reqwest::RequestBuilder {
        self.client
            .get(self.api_url(path))
            .header(header::ACCEPT, GITHUB_JSON)
            .bearer_auth(token.secret())
    }

    async fn request_emails(&self, token: &AccessToken) -> reqwest::Result<Vec<EmailRecord>> {
        self.api_get("/user/emails", token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl IdentityProvider for GitHubClient {
    async fn exchange_code_for_token(&self, code: &str) -> OAuthErrorResult<AccessToken> {
        if code.is_empty() {
            return Err(OAuthError::upstream("Authorization code is required"));
        }

        #[derive(Serialize)]
        struct TokenRequest<'a> {
            client_id: &'a str,
            client_secret: &'a str,
            code: &'a str,
        }

        let body = TokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            code,
        };

        let request_failed =
            |e: reqwest::Error| OAuthError::upstream(format!("GitHub API request failed: {}", e));

        let data: TokenResponse = self
            .client
            .post(&self.config.token_url)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(request_failed)?
            .error_for_status()
            .map_err(request_failed)?
            .json()
            .await
            .map_err(request_failed)?;

        match data.access_token {
            Some(token) if !token.is_empty() => {
                debug!("Exchanged authorization code for GitHub access token");
                Ok(AccessToken::new(token))
            }
            _ => Err(OAuthError::upstream(
                "Failed to obtain access token from GitHub",
            )),
        }
    }

    async fn fetch_profile(&self, token: &AccessToken) -> OAuthErrorResult<ExternalIdentity> {
        let fetch_failed = |e: reqwest::Error| {
            OAuthError::upstream(format!("Failed to fetch user info from GitHub: {}", e))
        };

        let user: GitHubUser = self
            .api_get("/user", token)
            .send()
            .await
            .map_err(fetch_failed)?
            .error_for_status()
            .map_err(fetch_failed)?
            .json()
            .await
            .map_err(fetch_failed)?;

        debug!("Fetched GitHub profile for user id {}", user.id);
        Ok(user.into())
    }

    async fn fetch_verified_emails(&self, token: &AccessToken) -> Vec<EmailRecord> {
        match self.request_emails(token).await {
            Ok(emails) => emails,
            Err(e) => {
                warn!("GitHub email lookup failed, continuing without emails: {}", e);
                Vec::new()
            }
        }
    }
}
