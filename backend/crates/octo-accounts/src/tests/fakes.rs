use octo_core::{
    AccountStore, EmailRecord, ExternalIdentity, LocalAccount, StoreError, StoreResult,
    UniqueField,
};
use octo_github::{AccessToken, IdentityProvider, OAuthError, Result as OAuthErrorResult};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Account store enforcing the same uniqueness rules as the database, with
/// knobs to simulate concurrent writers.
#[derive(Default)]
pub struct InMemoryAccountStore {
    pub accounts: Mutex<Vec<LocalAccount>>,
    pub writes: AtomicUsize,
    /// `find_by_email` reports nothing, as if the owner was deleted mid-flight
    pub hide_email_owners: bool,
    /// Next `create` fails with this violation regardless of contents
    pub fail_next_create: Mutex<Option<UniqueField>>,
    /// Every call fails with a backend error
    pub broken: bool,
}

impl InMemoryAccountStore {
    pub fn with_accounts(accounts: Vec<LocalAccount>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
            ..Default::default()
        }
    }

    pub fn accounts(&self) -> Vec<LocalAccount> {
        self.accounts.lock().unwrap().clone()
    }

    pub fn get(&self, id: uuid::Uuid) -> Option<LocalAccount> {
        self.accounts().into_iter().find(|a| a.id == id)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_unique(accounts: &[LocalAccount], candidate: &LocalAccount) -> StoreResult<()> {
        for other in accounts.iter().filter(|a| a.id != candidate.id) {
            if candidate.provider_id.is_some() && other.provider_id == candidate.provider_id {
                return Err(StoreError::unique_violation(
                    UniqueField::ProviderId,
                    "UNIQUE constraint failed: accounts.provider_id",
                ));
            }
            if candidate.email.is_some() && other.email == candidate.email {
                return Err(StoreError::unique_violation(
                    UniqueField::Email,
                    "UNIQUE constraint failed: accounts.email",
                ));
            }
        }
        Ok(())
    }

    fn ensure_working(&self) -> StoreResult<()> {
        if self.broken {
            return Err(StoreError::backend("database is locked"));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_provider_id(&self, provider_id: &str) -> StoreResult<Option<LocalAccount>> {
        self.ensure_working()?;
        Ok(self
            .accounts()
            .into_iter()
            .find(|a| a.provider_id.as_deref() == Some(provider_id)))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<LocalAccount>> {
        self.ensure_working()?;
        if self.hide_email_owners {
            return Ok(None);
        }
        Ok(self
            .accounts()
            .into_iter()
            .find(|a| a.email.as_deref() == Some(email)))
    }

    async fn create(&self, account: &LocalAccount) -> StoreResult<()> {
        self.ensure_working()?;
        if let Some(field) = self.fail_next_create.lock().unwrap().take() {
            return Err(StoreError::unique_violation(field, "simulated concurrent insert"));
        }
        let mut accounts = self.accounts.lock().unwrap();
        Self::check_unique(&accounts, account)?;
        accounts.push(account.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn update(&self, account: &LocalAccount) -> StoreResult<()> {
        self.ensure_working()?;
        let mut accounts = self.accounts.lock().unwrap();
        Self::check_unique(&accounts, account)?;
        let slot = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .ok_or_else(|| StoreError::not_found(account.id.to_string()))?;
        *slot = account.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Scripted identity provider
pub struct FakeProvider {
    pub token: Option<String>,
    pub identity: ExternalIdentity,
    pub emails: Vec<EmailRecord>,
    email_fetches: AtomicUsize,
}

impl FakeProvider {
    pub fn new(identity: ExternalIdentity) -> Self {
        Self {
            token: Some("gho_test".to_string()),
            identity,
            emails: Vec::new(),
            email_fetches: AtomicUsize::new(0),
        }
    }

    pub fn with_emails(mut self, emails: Vec<EmailRecord>) -> Self {
        self.emails = emails;
        self
    }

    pub fn rejecting_codes(mut self) -> Self {
        self.token = None;
        self
    }

    pub fn email_fetches(&self) -> usize {
        self.email_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn exchange_code_for_token(&self, _code: &str) -> OAuthErrorResult<AccessToken> {
        self.token
            .as_ref()
            .map(AccessToken::new)
            .ok_or_else(|| OAuthError::upstream("Failed to obtain access token from GitHub"))
    }

    async fn fetch_profile(&self, _token: &AccessToken) -> OAuthErrorResult<ExternalIdentity> {
        Ok(self.identity.clone())
    }

    async fn fetch_verified_emails(&self, _token: &AccessToken) -> Vec<EmailRecord> {
        self.email_fetches.fetch_add(1, Ordering::SeqCst);
        self.emails.clone()
    }
}

pub fn octocat() -> ExternalIdentity {
    ExternalIdentity {
        provider_id: "583231".to_string(),
        login_handle: "octocat".to_string(),
        display_name: "Mona Lisa Octocat".to_string(),
        profile_url: "https://github.com/octocat".to_string(),
        declared_email: Some("octocat@github.com".to_string()),
    }
}

pub fn existing_account(email: &str, provider_id: Option<&str>) -> LocalAccount {
    let mut account = LocalAccount::new(Some(email.to_string()));
    account.provider_id = provider_id.map(str::to_string);
    account.first_name = "Existing".to_string();
    account.last_name = "Owner".to_string();
    account
}
