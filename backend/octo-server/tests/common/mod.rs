#![allow(dead_code)]

//! Test infrastructure for octo-server API tests

use octo_accounts::Authenticator;
use octo_auth::SessionTokenIssuer;
use octo_db::AccountRepository;
use octo_github::{GitHubClient, GitHubClientConfig};
use octo_server::AppState;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/octo-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn create_token_issuer() -> SessionTokenIssuer {
    SessionTokenIssuer::with_hs256(
        TEST_JWT_SECRET,
        Duration::from_secs(300),
        Duration::from_secs(86_400),
    )
}

/// Create AppState talking to a mocked GitHub
pub async fn create_test_app_state(github: &MockServer) -> AppState {
    let pool = create_test_pool().await;
    let config = GitHubClientConfig::new("client-id", "client-secret")
        .with_token_url(format!("{}/login/oauth/access_token", github.uri()))
        .with_api_base_url(&github.uri())
        .with_timeout(Duration::from_secs(2));
    let client = Arc::new(GitHubClient::new(config).expect("client should build"));
    let store = Arc::new(AccountRepository::new(pool.clone()));

    AppState {
        pool,
        authenticator: Arc::new(Authenticator::new(store, client, "github.com")),
        token_issuer: Arc::new(create_token_issuer()),
    }
}

/// Mock a successful code exchange and profile for octocat
pub async fn mount_github_sign_in(server: &MockServer, email: Option<&str>) {
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "gho_test"})),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 583231,
            "login": "octocat",
            "name": "Mona Lisa Octocat",
            "html_url": "https://github.com/octocat",
            "email": email
        })))
        .mount(server)
        .await;
}

/// POST a JSON body and return status plus parsed JSON (Null when empty)
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}
