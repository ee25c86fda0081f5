use octo_core::ExternalIdentity;

use serde::Deserialize;

/// Subset of the `GET /user` response
#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<GitHubUser> for ExternalIdentity {
    fn from(user: GitHubUser) -> Self {
        ExternalIdentity {
            provider_id: user.id.to_string(),
            login_handle: user.login.unwrap_or_default(),
            display_name: user.name.unwrap_or_default(),
            profile_url: user.html_url.unwrap_or_default(),
            declared_email: user.email.filter(|e| !e.is_empty()),
        }
    }
}
