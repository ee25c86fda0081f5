//! Errors reported by an [`AccountStore`](crate::AccountStore).
//!
//! Uniqueness violations carry the offending field so the reconciler can tell
//! an email collision (repairable) from any other collision (fatal).

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Account columns guarded by a uniqueness constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    ProviderId,
    Email,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProviderId => "provider_id",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unique constraint violated on {field}: {message} {location}")]
    UniqueViolation {
        field: UniqueField,
        message: String,
        location: ErrorLocation,
    },

    #[error("Account not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Account store failure: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unique_violation<S: Into<String>>(field: UniqueField, message: S) -> Self {
        StoreError::UniqueViolation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        StoreError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn backend<S: Into<String>>(message: S) -> Self {
        StoreError::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The violated field, if this is a uniqueness violation
    pub fn violated_field(&self) -> Option<UniqueField> {
        match self {
            Self::UniqueViolation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
