use crate::EmailRecord;

#[test]
fn test_email_record_reads_provider_field_names() {
    let json = r#"{"email":"ada@example.com","primary":true,"verified":false,"visibility":null}"#;

    let record: EmailRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record, EmailRecord::new("ada@example.com", true, false));
}

#[test]
fn test_email_record_missing_flags_default_to_false() {
    let record: EmailRecord = serde_json::from_str(r#"{"email":"ada@example.com"}"#).unwrap();

    assert!(!record.is_primary);
    assert!(!record.is_verified);
}
