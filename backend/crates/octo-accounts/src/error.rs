use octo_core::StoreError;
use octo_github::OAuthError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountsError {
    /// The one failure kind callers of the sign-in flow see
    #[error("GitHub OAuth authentication failed: {message} {location}")]
    UpstreamAuthFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Account store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Identity provider error: {source} {location}")]
    Provider {
        #[source]
        source: OAuthError,
        location: ErrorLocation,
    },
}

impl AccountsError {
    /// Create an upstream authentication failure
    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        AccountsError::UpstreamAuthFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap anything that is not already an upstream failure into one,
    /// keeping the cause text.
    #[track_caller]
    pub fn into_auth_failure(self) -> Self {
        match self {
            Self::UpstreamAuthFailure { .. } => self,
            other => Self::upstream(format!("Authentication failed: {}", other)),
        }
    }

    /// Human-readable cause without the source location
    pub fn message(&self) -> String {
        match self {
            Self::UpstreamAuthFailure { message, .. } => message.clone(),
            Self::Store { source, .. } => source.to_string(),
            Self::Provider { source, .. } => source.message().to_string(),
        }
    }
}

impl From<StoreError> for AccountsError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<OAuthError> for AccountsError {
    #[track_caller]
    fn from(source: OAuthError) -> Self {
        match source {
            OAuthError::UpstreamAuthFailure { message, location } => {
                Self::UpstreamAuthFailure { message, location }
            }
            other => Self::Provider {
                source: other,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountsError>;
