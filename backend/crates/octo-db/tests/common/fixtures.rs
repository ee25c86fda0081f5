#![allow(dead_code)]

use octo_core::LocalAccount;

/// Creates a linked test account with sensible defaults
pub fn create_test_account(provider_id: &str, email: &str) -> LocalAccount {
    let mut account = LocalAccount::new(Some(email.to_string()));
    account.provider_id = Some(provider_id.to_string());
    account.login_handle = format!("user{}", provider_id);
    account.first_name = "Test".to_string();
    account.last_name = "User".to_string();
    account.profile_url = format!("https://github.com/user{}", provider_id);
    account
}
