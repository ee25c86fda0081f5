//! Identity facts reported by the provider for a single sign-in.

/// A provider identity, alive only for the duration of one reconciliation.
///
/// Empty strings stand in for fields the provider omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    /// Stable provider-issued identifier
    pub provider_id: String,
    pub login_handle: String,
    pub display_name: String,
    pub profile_url: String,
    /// Public email from the profile, if the user exposes one
    pub declared_email: Option<String>,
}

impl ExternalIdentity {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            login_handle: String::new(),
            display_name: String::new(),
            profile_url: String::new(),
            declared_email: None,
        }
    }

    /// Login handle, or `fallback` when the provider reported none
    pub fn login_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.login_handle.is_empty() {
            fallback
        } else {
            &self.login_handle
        }
    }
}
