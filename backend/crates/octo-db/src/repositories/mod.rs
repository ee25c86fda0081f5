pub mod account_repository;
pub mod revoked_token_repository;
