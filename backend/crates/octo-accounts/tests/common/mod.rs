#![allow(dead_code)]

use octo_github::{GitHubClient, GitHubClientConfig};

use std::time::Duration;

use serde_json::json;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates an in-memory SQLite pool with the account schema
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../octo-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn github_client(server: &MockServer, timeout: Duration) -> GitHubClient {
    let config = GitHubClientConfig::new("client-id", "client-secret")
        .with_token_url(format!("{}/login/oauth/access_token", server.uri()))
        .with_api_base_url(&server.uri())
        .with_timeout(timeout);
    GitHubClient::new(config).expect("client should build")
}

pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "gho_live",
            "token_type": "bearer",
            "scope": "user:email"
        })))
        .mount(server)
        .await;
}

pub async fn mount_profile(server: &MockServer, email: Option<&str>) {
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

pub async fn mount_emails(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/user/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
