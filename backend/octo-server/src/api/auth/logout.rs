//! Logout handler

use crate::{ApiError, ApiResult, AppState, LogoutRequest};

use octo_auth::TokenType;
use octo_db::RevokedTokenRepository;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use log::info;

/// POST /api/v1/auth/logout/
///
/// Blacklist a refresh token. Malformed, expired, access-typed or already
/// revoked tokens are all "Invalid token".
pub async fn logout(
    State(state): State<AppState>,
    payload: Result<Json<LogoutRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let refresh = payload
        .ok()
        .and_then(|Json(request)| request.refresh)
        .ok_or_else(ApiError::invalid_token)?;

    let claims = state.token_issuer.validate(&refresh, TokenType::Refresh)?;

    let repo = RevokedTokenRepository::new(state.pool.clone());
    if repo.is_revoked(&claims.jti).await? {
        return Err(ApiError::invalid_token());
    }

    // A concurrent logout may still win the insert
    if !repo.revoke(&claims.jti, &claims.sub, claims.exp).await? {
        return Err(ApiError::invalid_token());
    }

    info!("Revoked refresh token {} for account {}", claims.jti, claims.sub);

    Ok(StatusCode::OK)
}
