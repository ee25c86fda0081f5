use crate::{AccountType, LocalAccount};

#[test]
fn test_local_account_new() {
    let account = LocalAccount::new(Some("ada@example.com".to_string()));

    assert_eq!(account.email.as_deref(), Some("ada@example.com"));
    assert_eq!(account.account_type, AccountType::WriterOrReader);
    assert_eq!(account.created_at, account.updated_at);
    assert!(!account.is_verified);
    assert!(!account.is_linked());
}

#[test]
fn test_local_account_is_linked() {
    let mut account = LocalAccount::new(None);
    assert!(!account.is_linked());

    account.provider_id = Some("583231".to_string());
    assert!(account.is_linked());
}

#[test]
fn test_local_account_full_name() {
    let mut account = LocalAccount::new(None);
    account.first_name = "Ada".to_string();
    assert_eq!(account.full_name(), "Ada");

    account.last_name = "Lovelace".to_string();
    assert_eq!(account.full_name(), "Ada Lovelace");
}
