use octo_core::{ExternalIdentity, LocalAccount};
use octo_github::split_display_name;

/// Account fields derived from a provider identity once its email is settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub provider_id: String,
    pub email: String,
    pub login_handle: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_url: String,
}

impl AccountProfile {
    pub fn from_identity(identity: &ExternalIdentity, email: String) -> Self {
        let (first_name, last_name) = split_display_name(&identity.display_name);
        Self {
            provider_id: identity.provider_id.clone(),
            email,
            login_handle: identity.login_handle.clone(),
            first_name,
            last_name,
            profile_url: identity.profile_url.clone(),
        }
    }

    /// Overwrite every profile-derived field of `account`
    pub fn apply_to(&self, account: &mut LocalAccount) {
        account.provider_id = Some(self.provider_id.clone());
        account.email = Some(self.email.clone());
        account.login_handle = self.login_handle.clone();
        account.first_name = self.first_name.clone();
        account.last_name = self.last_name.clone();
        account.profile_url = self.profile_url.clone();
    }

    /// Link the identity onto an account that already owns the email.
    /// Names and email of the owner are left alone.
    pub fn attach_to(&self, account: &mut LocalAccount) {
        account.provider_id = Some(self.provider_id.clone());
        account.login_handle = self.login_handle.clone();
        account.profile_url = self.profile_url.clone();
    }
}
