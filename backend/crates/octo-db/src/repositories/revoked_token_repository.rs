use crate::Result as DbErrorResult;

use chrono::Utc;
use sqlx::SqlitePool;

/// Blacklist of refresh tokens, keyed by `jti`
pub struct RevokedTokenRepository {
    pool: SqlitePool,
}

impl RevokedTokenRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record `jti` as revoked. Returns `false` if it already was.
    pub async fn revoke(&self, jti: &str, account_id: &str, expires_at: i64) -> DbErrorResult<bool> {
        let revoked_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO revoked_tokens (jti, account_id, expires_at, revoked_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(jti) DO NOTHING
              "#,
        )
        .bind(jti)
        .bind(account_id)
        .bind(expires_at)
        .bind(revoked_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn is_revoked(&self, jti: &str) -> DbErrorResult<bool> {
        let found: Option<String> =
            sqlx::query_scalar("SELECT jti FROM revoked_tokens WHERE jti = ?")
                .bind(jti)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    /// Drop entries whose token has expired anyway
    pub async fn purge_expired(&self) -> DbErrorResult<u64> {
        let now = Utc::now().timestamp();

        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
