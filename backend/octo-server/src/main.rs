use octo_server::error::Result as ServerErrorResult;
use octo_server::{AppState, build_router, logger};

use octo_accounts::Authenticator;
use octo_auth::SessionTokenIssuer;
use octo_config::{Config, ConfigError};
use octo_db::{AccountRepository, RevokedTokenRepository};
use octo_github::{GitHubClient, GitHubClientConfig};

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

/// How often expired entries are dropped from the token blacklist
const REVOKED_TOKEN_PURGE_INTERVAL: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting octo-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = octo_db::open_pool(&config.database_path()?).await?;

    let github_config = GitHubClientConfig::new(
        config.github.client_id.clone(),
        config.github.client_secret.clone(),
    )
    .with_token_url(config.github.token_url.clone())
    .with_api_base_url(&config.github.api_base_url)
    .with_timeout(config.github.timeout());
    let github = Arc::new(GitHubClient::new(github_config)?);

    let store = Arc::new(AccountRepository::new(pool.clone()));
    let authenticator = Arc::new(Authenticator::new(
        store,
        github,
        config.github.noreply_domain.clone(),
    ));

    let jwt_secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;
    let token_issuer = Arc::new(SessionTokenIssuer::with_hs256(
        jwt_secret.as_bytes(),
        config.auth.access_token_ttl(),
        config.auth.refresh_token_ttl(),
    ));

    spawn_revoked_token_purge(RevokedTokenRepository::new(pool.clone()));

    let app = build_router(AppState {
        pool,
        authenticator,
        token_issuer,
    });

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual bound address matters when port is 0 / auto-assigned
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

fn spawn_revoked_token_purge(repo: RevokedTokenRepository) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(REVOKED_TOKEN_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            match repo.purge_expired().await {
                Ok(0) => {}
                Ok(purged) => info!("Purged {} expired revoked tokens", purged),
                Err(e) => warn!("Failed to purge revoked tokens: {}", e),
            }
        }
    });
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
