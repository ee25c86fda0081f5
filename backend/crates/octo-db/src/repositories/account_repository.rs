//! SQLite-backed [`AccountStore`].
//!
//! Uniqueness of `provider_id` and `email` is enforced by the table's unique
//! indexes, never by read-then-write checks here. A violated index comes back
//! as [`StoreError::UniqueViolation`] naming the column.

use crate::{DbError, Result as DbErrorResult};

use octo_core::{
    AccountStore, AccountType, LocalAccount, StoreError, StoreResult, UniqueField,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "accounts";

const SELECT_COLUMNS: &str = r#"
    SELECT id, provider_id, email, login_handle, first_name, last_name,
        profile_url, account_type, is_verified, created_at, updated_at
    FROM accounts
"#;

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<LocalAccount>> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn find_one_by(&self, column: &str, value: &str) -> StoreResult<Option<LocalAccount>> {
        let row = sqlx::query(&format!("{} WHERE {} = ?", SELECT_COLUMNS, column))
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        Ok(row.as_ref().map(account_from_row).transpose()?)
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_provider_id(&self, provider_id: &str) -> StoreResult<Option<LocalAccount>> {
        self.find_one_by("provider_id", provider_id).await
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<LocalAccount>> {
        self.find_one_by("email", email).await
    }

    async fn create(&self, account: &LocalAccount) -> StoreResult<()> {
        sqlx::query(
            r#"
                INSERT INTO accounts (
                    id, provider_id, email, login_handle, first_name, last_name,
                    profile_url, account_type, is_verified, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(account.id.to_string())
        .bind(&account.provider_id)
        .bind(&account.email)
        .bind(&account.login_handle)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.profile_url)
        .bind(account.account_type.code())
        .bind(account.is_verified)
        .bind(account.created_at.timestamp())
        .bind(account.updated_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        Ok(())
    }

    async fn update(&self, account: &LocalAccount) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE accounts SET
                    provider_id = ?, email = ?, login_handle = ?, first_name = ?,
                    last_name = ?, profile_url = ?, account_type = ?, is_verified = ?,
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&account.provider_id)
        .bind(&account.email)
        .bind(&account.login_handle)
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.profile_url)
        .bind(account.account_type.code())
        .bind(account.is_verified)
        .bind(account.updated_at.timestamp())
        .bind(account.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(format!("account {}", account.id)));
        }

        Ok(())
    }
}

/// Translate a sqlx failure, recognising SQLite's
/// `UNIQUE constraint failed: accounts.<column>` messages.
#[track_caller]
fn store_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        let message = db_err.message().to_string();
        if message.contains("accounts.email") {
            return StoreError::unique_violation(UniqueField::Email, message);
        }
        if message.contains("accounts.provider_id") {
            return StoreError::unique_violation(UniqueField::ProviderId, message);
        }
    }

    StoreError::from(DbError::from(err))
}

fn account_from_row(row: &SqliteRow) -> DbErrorResult<LocalAccount> {
    let id: String = row.try_get("id")?;
    let account_type: i64 = row.try_get("account_type")?;

    Ok(LocalAccount {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::corrupt_row(TABLE, format!("Invalid UUID in id: {}", e)))?,
        provider_id: row.try_get("provider_id")?,
        email: row.try_get("email")?,
        login_handle: row.try_get("login_handle")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        profile_url: row.try_get("profile_url")?,
        account_type: AccountType::from_code(account_type)
            .map_err(|e| DbError::corrupt_row(TABLE, e.to_string()))?,
        is_verified: row.try_get("is_verified")?,
        created_at: timestamp(row.try_get("created_at")?, "created_at")?,
        updated_at: timestamp(row.try_get("updated_at")?, "updated_at")?,
    })
}

fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::corrupt_row(TABLE, format!("Invalid timestamp in {}", column)))
}
