use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role classification of a local account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Administrator with full privileges
    Admin,
    /// Standard account with limited permissions
    #[default]
    WriterOrReader,
}

impl AccountType {
    /// Numeric code stored in the database
    pub fn code(&self) -> i64 {
        match self {
            Self::Admin => 1,
            Self::WriterOrReader => 2,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::WriterOrReader => "writer or reader",
        }
    }

    #[track_caller]
    pub fn from_code(code: i64) -> CoreErrorResult<Self> {
        match code {
            1 => Ok(Self::Admin),
            2 => Ok(Self::WriterOrReader),
            _ => Err(CoreError::InvalidAccountType {
                value: code,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
