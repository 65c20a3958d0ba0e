use shop_db::UserLockRegistry;

use std::time::Duration;

use tokio::time::timeout;
use uuid::Uuid;

#[tokio::test]
async fn given_held_lock_when_same_user_acquires_then_blocks_until_released() {
    let registry = UserLockRegistry::new();
    let user_id = Uuid::new_v4();

    let guard = registry.acquire(user_id).await;

    // Second acquisition for the same user must not complete while the
    // first guard is held.
    let registry2 = registry.clone();
    let blocked = timeout(Duration::from_millis(50), registry2.acquire(user_id)).await;
    assert!(blocked.is_err());

    drop(guard);

    let acquired = timeout(Duration::from_millis(500), registry.acquire(user_id)).await;
    assert!(acquired.is_ok());
}

#[tokio::test]
async fn given_held_lock_when_different_user_acquires_then_no_contention() {
    let registry = UserLockRegistry::new();

    let _alice_guard = registry.acquire(Uuid::new_v4()).await;

    let acquired = timeout(Duration::from_millis(500), registry.acquire(Uuid::new_v4())).await;
    assert!(acquired.is_ok());
}
