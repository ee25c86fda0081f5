use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("GitHub OAuth authentication failed: {message} {location}")]
    UpstreamAuthFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to build HTTP client: {message} {location}")]
    ClientBuild {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl OAuthError {
    /// Create an upstream authentication failure
    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        OAuthError::UpstreamAuthFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable cause without the source location
    pub fn message(&self) -> &str {
        match self {
            Self::UpstreamAuthFailure { message, .. } => message,
            Self::ClientBuild { message, .. } => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, OAuthError>;
