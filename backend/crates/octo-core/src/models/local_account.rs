//! Local account entity - the record a provider identity resolves to.

use crate::AccountType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted local account.
/// `provider_id` and `email` are each unique across all accounts when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalAccount {
    pub id: Uuid,
    /// Provider identity linked to this account
    pub provider_id: Option<String>,
    pub email: Option<String>,
    pub login_handle: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_url: String,
    pub account_type: AccountType,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LocalAccount {
    /// Create an unlinked account with default values
    pub fn new(email: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            provider_id: None,
            email,
            login_handle: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            profile_url: String::new(),
            account_type: AccountType::default(),
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a provider identity is attached
    pub fn is_linked(&self) -> bool {
        self.provider_id.is_some()
    }

    /// First and last name joined by a space, trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Bump `updated_at` before a write
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
