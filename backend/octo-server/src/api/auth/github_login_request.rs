use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GitHubLoginRequest {
    /// OAuth authorization code from the GitHub redirect
    #[serde(default)]
    pub code: Option<String>,
}
