pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::open_pool;
pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use repositories::revoked_token_repository::RevokedTokenRepository;
