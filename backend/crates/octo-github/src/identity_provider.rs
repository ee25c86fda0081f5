use crate::{AccessToken, Result as OAuthErrorResult};

use octo_core::{EmailRecord, ExternalIdentity};

use async_trait::async_trait;

/// The remote half of the sign-in flow.
///
/// Nothing here persists state; every call is a single outbound request
/// with a fixed timeout and no retries.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange an authorization code for an access credential
    async fn exchange_code_for_token(&self, code: &str) -> OAuthErrorResult<AccessToken>;

    /// Fetch the profile of the credential's owner. Email resolution is
    /// left to the caller.
    async fn fetch_profile(&self, token: &AccessToken) -> OAuthErrorResult<ExternalIdentity>;

    /// Fetch the owner's email listing. Best-effort: transport failures
    /// yield an empty list.
    async fn fetch_verified_emails(&self, token: &AccessToken) -> Vec<EmailRecord>;
}
