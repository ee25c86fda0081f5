pub mod access_token;
pub mod display_name;
pub mod email_selection;
pub mod error;
pub mod github_client;
pub mod github_client_config;
pub mod github_user;
pub mod identity_provider;

pub use access_token::AccessToken;
pub use display_name::split_display_name;
pub use email_selection::select_primary_email;
pub use error::{OAuthError, Result};
pub use github_client::GitHubClient;
pub use github_client_config::GitHubClientConfig;
pub use identity_provider::IdentityProvider;

/// Provider name used in synthesized placeholder addresses
pub const PROVIDER_NAME: &str = "github";
