use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] octo_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] octo_db::DbError),

    #[error("GitHub client error: {0}")]
    GitHub(#[from] octo_github::OAuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
