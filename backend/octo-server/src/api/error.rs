//! REST API error types
//!
//! Every client-visible failure of the auth endpoints is a 400 with a flat
//! `{"error": "..."}` body.

use octo_accounts::AccountsError;
use octo_auth::AuthError;
use octo_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const CODE_REQUIRED_MESSAGE: &str = "Authorization code is required";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn code_required() -> Self {
        Self::bad_request(CODE_REQUIRED_MESSAGE)
    }

    #[track_caller]
    pub fn invalid_token() -> Self {
        Self::bad_request(INVALID_TOKEN_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, error) = match self {
            ApiError::BadRequest { message, .. } => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ApiErrorResponse { error })).into_response()
    }
}

/// Sign-in failures carry their cause to the client
impl From<AccountsError> for ApiError {
    #[track_caller]
    fn from(e: AccountsError) -> Self {
        ApiError::bad_request(e.message())
    }
}

/// Token validation failures are never detailed to the client
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::warn!("Token rejected: {}", e);
        ApiError::invalid_token()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
