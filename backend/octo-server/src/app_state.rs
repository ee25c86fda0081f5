use octo_accounts::Authenticator;
use octo_auth::SessionTokenIssuer;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub authenticator: Arc<Authenticator>,
    pub token_issuer: Arc<SessionTokenIssuer>,
}
