pub mod account_profile;
pub mod account_reconciler;
pub mod authentication;
pub mod authenticator;
pub mod error;
pub mod noreply;
pub mod reconciliation;

pub use account_profile::AccountProfile;
pub use account_reconciler::AccountReconciler;
pub use authentication::Authentication;
pub use authenticator::Authenticator;
pub use error::{AccountsError, Result};
pub use noreply::{fallback_email, placeholder_email};
pub use reconciliation::Reconciliation;

#[cfg(test)]
mod tests;
