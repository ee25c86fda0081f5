use serde::Serialize;

/// Access and refresh JWTs handed to the client after sign-in
#[derive(Debug, Clone, Serialize)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
}
