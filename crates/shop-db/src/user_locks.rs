//! Per-user write serialization for cart reconciliation.
//!
//! The reconciler's delete-then-insert sequence is only safe when two
//! submissions for the same user cannot interleave. SQLite serializes
//! individual statements but not whole transactions from separate
//! connections, so the registry hands out one async mutex per user id.
//! Different users never contend with each other.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct UserLockRegistry {
    locks: Arc<RwLock<HashMap<Uuid, Arc<Mutex<()>>>>>,
}

impl UserLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a user, creating it on first use. The returned
    /// guard must be held across the whole reconciliation transaction.
    pub async fn acquire(&self, user_id: Uuid) -> OwnedMutexGuard<()> {
        // Fast path: lock already exists (read lock)
        let existing = {
            let locks = self.locks.read().await;
            locks.get(&user_id).cloned()
        };

        let lock = match existing {
            Some(lock) => lock,
            None => {
                let mut locks = self.locks.write().await;
                // Another task might have inserted while we waited for the
                // write lock.
                locks
                    .entry(user_id)
                    .or_insert_with(|| Arc::new(Mutex::new(())))
                    .clone()
            }
        };

        lock.lock_owned().await
    }
}
