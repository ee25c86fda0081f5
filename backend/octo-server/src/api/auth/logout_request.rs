use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    /// Refresh token to blacklist
    #[serde(default)]
    pub refresh: Option<String>,
}
