use octo_auth::SessionTokens;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

impl From<SessionTokens> for TokenPairResponse {
    fn from(tokens: SessionTokens) -> Self {
        Self {
            access: tokens.access,
            refresh: tokens.refresh,
        }
    }
}
