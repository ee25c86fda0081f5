//! Synthesized addresses for identities without a usable email.

/// `{login}-{provider_id}@users.noreply.{domain}`
pub fn placeholder_email(login: &str, provider_id: &str, domain: &str) -> String {
    format!("{}-{}@users.noreply.{}", login, provider_id, domain)
}

/// Address used when an email collision cannot be repaired by attaching to
/// the owning account. The `github-` prefix is literal, whatever the login.
pub fn fallback_email(provider_id: &str, domain: &str) -> String {
    format!("github-{}@users.noreply.{}", provider_id, domain)
}
