//! User repository: durable account records.
//!
//! Account deletion is the one multi-table operation here: cart rows and
//! the user row go in a single transaction (explicit two-step delete, no
//! schema-level cascade).

use crate::{DbError, Result as DbErrorResult};

use shop_core::{ErrorLocation, User};

use std::panic::Location;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    created_at: i64,
    updated_at: i64,
}

impl UserRow {
    fn into_user(self) -> DbErrorResult<User> {
        Ok(User {
            id: Uuid::parse_str(&self.id)
                .map_err(|e| DbError::decode(format!("invalid UUID in users.id: {e}")))?,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in users.created_at"))?,
            updated_at: DateTime::from_timestamp(self.updated_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in users.updated_at"))?,
        })
    }
}

/// Map a unique-constraint failure onto the column that caused it.
fn map_unique_violation(e: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        let field = if db_err.message().contains("users.email") {
            "email"
        } else {
            "username"
        };
        return DbError::UniqueViolation {
            field,
            location: ErrorLocation::from(Location::caller()),
        };
    }
    DbError::from(e)
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. Duplicate username or email yields
    /// `DbError::UniqueViolation` naming the offending field.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, username, email, password_hash, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, username, email, password_hash, created_at, updated_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Partial profile update: each field is written only when `Some`,
    /// absent fields are left as they are.
    pub async fn update_profile(
        &self,
        id: Uuid,
        username: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE users SET
                    username = COALESCE(?, username),
                    email = COALESCE(?, email),
                    password_hash = COALESCE(?, password_hash),
                    updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now().timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(id));
        }

        Ok(())
    }

    /// Delete the user and every cart row they own, as one transaction.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        let uid = id.to_string();

        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(&uid)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(&uid)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::user_not_found(id));
        }

        tx.commit().await?;

        Ok(())
    }
}
