use crate::{AccountReconciler, Authentication, Reconciliation, Result as AccountsErrorResult};

use octo_core::AccountStore;
use octo_github::IdentityProvider;

use std::sync::Arc;

use log::{info, warn};

/// Full sign-in flow: code exchange, profile fetch, reconciliation.
pub struct Authenticator {
    provider: Arc<dyn IdentityProvider>,
    reconciler: AccountReconciler,
}

impl Authenticator {
    pub fn new(
        store: Arc<dyn AccountStore>,
        provider: Arc<dyn IdentityProvider>,
        noreply_domain: impl Into<String>,
    ) -> Self {
        let reconciler = AccountReconciler::new(store, Arc::clone(&provider), noreply_domain);
        Self {
            provider,
            reconciler,
        }
    }

    /// Every failure surfaces as [`crate::AccountsError::UpstreamAuthFailure`].
    /// Upstream failures pass through unchanged, anything else is wrapped as
    /// `Authentication failed: {cause}`.
    pub async fn authenticate_user(&self, code: &str) -> AccountsErrorResult<Authentication> {
        match self.sign_in(code).await {
            Ok(authentication) => {
                info!(
                    "Authenticated account {} (created: {})",
                    authentication.account.id, authentication.created
                );
                Ok(authentication)
            }
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                Err(e.into_auth_failure())
            }
        }
    }

    async fn sign_in(&self, code: &str) -> AccountsErrorResult<Authentication> {
        let access_token = self.provider.exchange_code_for_token(code).await?;
        let identity = self.provider.fetch_profile(&access_token).await?;
        let Reconciliation { account, created } =
            self.reconciler.reconcile(&identity, &access_token).await?;

        Ok(Authentication {
            account,
            created,
            access_token,
        })
    }
}
