//! Cart repository: persisted cart rows and the replace-all reconciler.
//!
//! The reconciler (`replace_items`) applies a client-submitted cart as a
//! single transaction: delete every row the user owns, then insert one row
//! per submitted line. Repeated submissions of the same cart are idempotent
//! and stale rows never survive a checkout. Callers are expected to hold
//! the user's lock from `UserLockRegistry` across the call so concurrent
//! submissions for the same user cannot interleave.

use crate::{DbError, Result as DbErrorResult};

use shop_core::{CartItem, CartLine};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct CartItemRow {
    id: String,
    user_id: String,
    name: String,
    quantity: i64,
    created_at: i64,
}

impl CartItemRow {
    fn into_cart_item(self) -> DbErrorResult<CartItem> {
        Ok(CartItem {
            id: parse_uuid(&self.id, "cart_items.id")?,
            user_id: parse_uuid(&self.user_id, "cart_items.user_id")?,
            name: self.name,
            quantity: self.quantity,
            created_at: DateTime::from_timestamp(self.created_at, 0)
                .ok_or_else(|| DbError::decode("invalid timestamp in cart_items.created_at"))?,
        })
    }
}

fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::decode(format!("invalid UUID in {column}: {e}")))
}

pub struct CartRepository {
    pool: SqlitePool,
}

impl CartRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Replace the user's persisted cart with the submitted lines.
    ///
    /// Runs as one transaction: resolve the user, delete their existing
    /// rows, insert the new ones, commit. A failure at any step rolls the
    /// whole thing back, so the store never ends up with an empty or
    /// half-written cart. Each row keeps its index within the submission,
    /// so `items_for_user` returns the cart in the order the client sent
    /// it. Lines must already be validated by the caller
    /// (`CartLine::validate_all`).
    pub async fn replace_items(&self, user_id: Uuid, lines: &[CartLine]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        let uid = user_id.to_string();

        let user_row = sqlx::query("SELECT id FROM users WHERE id = ?")
            .bind(&uid)
            .fetch_optional(&mut *tx)
            .await?;

        if user_row.is_none() {
            // Nothing written yet; dropping the transaction rolls it back.
            return Err(DbError::user_not_found(user_id));
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(&uid)
            .execute(&mut *tx)
            .await?;

        let now = Utc::now().timestamp();
        for (position, line) in lines.iter().enumerate() {
            sqlx::query(
                r#"
                    INSERT INTO cart_items (id, user_id, name, quantity, position, created_at)
                    VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&uid)
            .bind(&line.name)
            .bind(line.quantity)
            .bind(position as i64)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    /// All cart rows owned by the user, in submission order
    pub async fn items_for_user(&self, user_id: Uuid) -> DbErrorResult<Vec<CartItem>> {
        let rows: Vec<CartItemRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, name, quantity, created_at
                FROM cart_items
                WHERE user_id = ?
                ORDER BY position ASC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CartItemRow::into_cart_item).collect()
    }

    /// Overwrite the quantity of the (user, name) row.
    ///
    /// A missing row is a silent no-op, not an error. Quantity must already
    /// be validated by the caller.
    pub async fn update_quantity(
        &self,
        user_id: Uuid,
        name: &str,
        quantity: i64,
    ) -> DbErrorResult<()> {
        sqlx::query("UPDATE cart_items SET quantity = ? WHERE user_id = ? AND name = ?")
            .bind(quantity)
            .bind(user_id.to_string())
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete the (user, name) row. Absence is a no-op; the operation is
    /// idempotent.
    pub async fn remove_item(&self, user_id: Uuid, name: &str) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM cart_items WHERE user_id = ? AND name = ?")
            .bind(user_id.to_string())
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
