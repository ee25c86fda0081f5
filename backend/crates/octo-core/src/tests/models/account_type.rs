use crate::{AccountType, CoreError};

#[test]
fn test_account_type_codes() {
    assert_eq!(AccountType::Admin.code(), 1);
    assert_eq!(AccountType::WriterOrReader.code(), 2);
}

#[test]
fn test_account_type_from_code() {
    assert_eq!(AccountType::from_code(1).unwrap(), AccountType::Admin);
    assert_eq!(
        AccountType::from_code(2).unwrap(),
        AccountType::WriterOrReader
    );
}

#[test]
fn test_account_type_rejects_unknown_code() {
    let result = AccountType::from_code(3);

    assert!(matches!(
        result,
        Err(CoreError::InvalidAccountType { value: 3, .. })
    ));
}

#[test]
fn test_account_type_default_is_writer_or_reader() {
    assert_eq!(AccountType::default(), AccountType::WriterOrReader);
    assert_eq!(AccountType::default().to_string(), "writer or reader");
}
