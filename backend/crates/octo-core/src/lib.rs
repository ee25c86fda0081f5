pub mod account_store;
pub mod error;
pub mod models;
pub mod store_error;

pub use account_store::AccountStore;
pub use error::{CoreError, Result};
pub use models::account_type::AccountType;
pub use models::email_record::EmailRecord;
pub use models::external_identity::ExternalIdentity;
pub use models::local_account::LocalAccount;
pub use store_error::{StoreError, StoreResult, UniqueField};

#[cfg(test)]
mod tests;
