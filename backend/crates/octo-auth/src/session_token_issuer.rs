use crate::{AuthError, Claims, Result as AuthErrorResult, SessionTokens, TokenType};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Clock skew tolerance when checking `exp`
const LEEWAY_SECS: u64 = 30;

/// Issues and validates HS256 session JWTs
pub struct SessionTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl SessionTokenIssuer {
    pub fn with_hs256(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = LEEWAY_SECS;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Issue a fresh access/refresh pair for `account_id`
    #[track_caller]
    pub fn issue(&self, account_id: Uuid) -> AuthErrorResult<SessionTokens> {
        Ok(SessionTokens {
            access: self.sign(account_id, TokenType::Access, self.access_ttl)?,
            refresh: self.sign(account_id, TokenType::Refresh, self.refresh_ttl)?,
        })
    }

    /// Validate signature, expiry and claims, and check the token is of the
    /// `expected` type
    #[track_caller]
    pub fn validate(&self, token: &str, expected: TokenType) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        let claims = token_data.claims;
        claims.validate()?;

        if claims.token_type != expected {
            return Err(AuthError::WrongTokenType {
                expected,
                actual: claims.token_type,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }

    #[track_caller]
    fn sign(&self, account_id: Uuid, token_type: TokenType, ttl: Duration) -> AuthErrorResult<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: account_id.to_string(),
            token_type,
            jti: Uuid::new_v4().to_string(),
            iat,
            exp: iat + ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
