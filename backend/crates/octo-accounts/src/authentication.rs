use octo_core::LocalAccount;
use octo_github::AccessToken;

/// Result of a completed sign-in
#[derive(Debug, Clone)]
pub struct Authentication {
    pub account: LocalAccount,
    pub created: bool,
    pub access_token: AccessToken,
}
