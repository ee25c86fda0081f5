//! Maps a provider identity onto exactly one local account.
//!
//! Upsert keyed on the provider id. An email collision is repaired by linking
//! the identity to the account that owns the address; if that owner cannot be
//! found the upsert is retried once with a synthesized fallback address. Any
//! other uniqueness violation aborts the sign-in, and a failed retry surfaces
//! as a plain store error.

use crate::{
    AccountProfile, AccountsError, Reconciliation, Result as AccountsErrorResult, fallback_email,
    placeholder_email,
};

use octo_core::{AccountStore, ExternalIdentity, LocalAccount, StoreError, StoreResult, UniqueField};
use octo_github::{AccessToken, IdentityProvider, PROVIDER_NAME, select_primary_email};

use std::sync::Arc;

use log::{debug, info, warn};

pub struct AccountReconciler {
    store: Arc<dyn AccountStore>,
    provider: Arc<dyn IdentityProvider>,
    noreply_domain: String,
}

impl AccountReconciler {
    pub fn new(
        store: Arc<dyn AccountStore>,
        provider: Arc<dyn IdentityProvider>,
        noreply_domain: impl Into<String>,
    ) -> Self {
        Self {
            store,
            provider,
            noreply_domain: noreply_domain.into(),
        }
    }

    pub async fn reconcile(
        &self,
        identity: &ExternalIdentity,
        token: &AccessToken,
    ) -> AccountsErrorResult<Reconciliation> {
        let email = self.resolve_email(identity, token).await;
        let profile = AccountProfile::from_identity(identity, email);

        match self.upsert_by_provider_id(&profile).await {
            Ok(reconciliation) => Ok(reconciliation),
            Err(StoreError::UniqueViolation {
                field: UniqueField::Email,
                ..
            }) => self.repair_email_collision(profile).await,
            Err(e) => Err(creation_failure(e)),
        }
    }

    /// Declared email, else the best verified address, else a placeholder
    async fn resolve_email(&self, identity: &ExternalIdentity, token: &AccessToken) -> String {
        if let Some(email) = &identity.declared_email {
            return email.clone();
        }

        let emails = self.provider.fetch_verified_emails(token).await;
        match select_primary_email(&emails) {
            Some(email) => email,
            None => {
                let placeholder = placeholder_email(
                    identity.login_or(PROVIDER_NAME),
                    &identity.provider_id,
                    &self.noreply_domain,
                );
                debug!(
                    "No usable email for provider id {}, using {}",
                    identity.provider_id, placeholder
                );
                placeholder
            }
        }
    }

    async fn upsert_by_provider_id(&self, profile: &AccountProfile) -> StoreResult<Reconciliation> {
        match self.store.find_by_provider_id(&profile.provider_id).await? {
            Some(mut account) => {
                profile.apply_to(&mut account);
                account.touch();
                self.store.update(&account).await?;
                Ok(Reconciliation {
                    account,
                    created: false,
                })
            }
            None => {
                let mut account = LocalAccount::new(None);
                profile.apply_to(&mut account);
                self.store.create(&account).await?;
                info!(
                    "Created account {} for provider id {}",
                    account.id, profile.provider_id
                );
                Ok(Reconciliation {
                    account,
                    created: true,
                })
            }
        }
    }

    async fn repair_email_collision(
        &self,
        mut profile: AccountProfile,
    ) -> AccountsErrorResult<Reconciliation> {
        warn!(
            "Email {} already in use, linking provider id {} to its owner",
            profile.email, profile.provider_id
        );

        match self.store.find_by_email(&profile.email).await? {
            Some(mut owner) => {
                profile.attach_to(&mut owner);
                owner.touch();
                self.store.update(&owner).await.map_err(creation_failure)?;
                info!(
                    "Linked provider id {} to existing account {}",
                    profile.provider_id, owner.id
                );
                Ok(Reconciliation {
                    account: owner,
                    created: false,
                })
            }
            None => {
                profile.email = fallback_email(&profile.provider_id, &self.noreply_domain);
                warn!(
                    "Owner of colliding email vanished, retrying with {}",
                    profile.email
                );
                // Failures here stay store errors; the sign-in wraps them
                Ok(self.upsert_by_provider_id(&profile).await?)
            }
        }
    }
}

/// Uniqueness violations past the repair point are fatal to the sign-in;
/// anything else stays a store error.
#[track_caller]
fn creation_failure(error: StoreError) -> AccountsError {
    match error {
        StoreError::UniqueViolation { .. } => {
            AccountsError::upstream(format!("User creation failed: {}", error))
        }
        other => AccountsError::from(other),
    }
}
