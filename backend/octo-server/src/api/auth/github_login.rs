//! GitHub sign-in handler

use crate::{ApiError, ApiResult, AppState, GitHubLoginRequest, TokenPairResponse};

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use log::info;

/// POST /api/v1/auth/github/
///
/// Exchange an authorization code for a session token pair, creating or
/// linking the local account on the way.
pub async fn github_oauth_callback(
    State(state): State<AppState>,
    payload: Result<Json<GitHubLoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenPairResponse>> {
    let code = payload
        .ok()
        .and_then(|Json(request)| request.code)
        .filter(|code| !code.is_empty())
        .ok_or_else(ApiError::code_required)?;

    let authentication = state.authenticator.authenticate_user(&code).await?;

    let tokens = state
        .token_issuer
        .issue(authentication.account.id)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to issue session tokens: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!(
        "Issued session for account {} (new: {})",
        authentication.account.id, authentication.created
    );

    Ok(Json(tokens.into()))
}
