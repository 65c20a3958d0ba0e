//! Cart item entity - one persisted product line in one user's cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted cart row. Every item has exactly one owning user and
/// never outlives it (account deletion removes the rows in the same
/// transaction). Uniqueness of (user_id, name) is a policy choice kept
/// out of the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    /// Create a new cart item owned by `user_id`
    pub fn new(user_id: Uuid, name: String, quantity: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            quantity,
            created_at: Utc::now(),
        }
    }
}
