use octo_core::LocalAccount;

/// Outcome of mapping one identity to one local account
#[derive(Debug, Clone)]
pub struct Reconciliation {
    pub account: LocalAccount,
    /// `true` when a new record was inserted
    pub created: bool,
}
