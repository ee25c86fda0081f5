pub mod account_type;
pub mod email_record;
pub mod external_identity;
pub mod local_account;
