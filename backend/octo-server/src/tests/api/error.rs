use crate::ApiError;

use octo_accounts::AccountsError;
use octo_auth::{AuthError, TokenType};

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_bad_request_returns_400_with_flat_error_body() {
    let error = ApiError::bad_request("Authorization code is required");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"error": "Authorization code is required"}));
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Database operation failed");
}

#[tokio::test]
async fn test_accounts_error_keeps_cause_without_location() {
    let error: ApiError = AccountsError::upstream("Failed to obtain access token from GitHub").into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to obtain access token from GitHub");
}

#[tokio::test]
async fn test_auth_error_is_reported_as_invalid_token() {
    let error: ApiError = AuthError::WrongTokenType {
        expected: TokenType::Refresh,
        actual: TokenType::Access,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid token");
}
