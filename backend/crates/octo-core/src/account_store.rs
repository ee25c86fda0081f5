use crate::{LocalAccount, StoreResult};

use async_trait::async_trait;

/// Persistence contract for local accounts.
///
/// Implementations must enforce uniqueness of `provider_id` and `email`
/// (when non-null) atomically on every write and report collisions as
/// [`StoreError::UniqueViolation`](crate::StoreError::UniqueViolation).
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Look up the account linked to a provider identity
    async fn find_by_provider_id(&self, provider_id: &str) -> StoreResult<Option<LocalAccount>>;

    /// Look up the account owning an email address
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<LocalAccount>>;

    /// Insert a new account
    async fn create(&self, account: &LocalAccount) -> StoreResult<()>;

    /// Overwrite an existing account, matched by `id`
    async fn update(&self, account: &LocalAccount) -> StoreResult<()>;
}
