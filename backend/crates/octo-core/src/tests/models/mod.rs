mod account_type;
mod email_record;
mod local_account;
