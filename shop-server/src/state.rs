use shop_auth::SessionStore;
use shop_db::UserLockRegistry;

use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Session token -> identity; the only source of "who is calling"
    pub sessions: SessionStore,
    /// Per-user mutual exclusion for cart reconciliation and account deletion
    pub user_locks: UserLockRegistry,
    /// bcrypt work factor for newly hashed passwords
    pub bcrypt_cost: u32,
}
