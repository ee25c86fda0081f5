pub mod claims;
pub mod error;
pub mod session_token_issuer;
pub mod session_tokens;
pub mod token_type;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use session_token_issuer::SessionTokenIssuer;
pub use session_tokens::SessionTokens;
pub use token_type::TokenType;
