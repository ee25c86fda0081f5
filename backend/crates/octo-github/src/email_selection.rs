use octo_core::EmailRecord;

/// Pick the address to use from the provider's email listing.
///
/// First address flagged both primary and verified wins; otherwise the first
/// verified one; otherwise none. Input order is the provider's and is kept.
pub fn select_primary_email(emails: &[EmailRecord]) -> Option<String> {
    emails
        .iter()
        .find(|e| e.is_primary && e.is_verified)
        .or_else(|| emails.iter().find(|e| e.is_verified))
        .map(|e| e.address.clone())
}
