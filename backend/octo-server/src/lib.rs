pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        github_login::github_oauth_callback, github_login_request::GitHubLoginRequest,
        logout::logout, logout_request::LogoutRequest, token_pair_response::TokenPairResponse,
    },
    error::ApiError,
    error::ApiErrorResponse,
    error::Result as ApiResult,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
