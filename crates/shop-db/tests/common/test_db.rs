use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user row directly, bypassing the repository
pub async fn create_test_user(pool: &SqlitePool, user_id: Uuid) {
    let id = user_id.to_string();
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(format!("user-{}", user_id))
    .bind(format!("test-{}@example.com", user_id))
    .bind("$2b$04$testhash")
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("Failed to create test user");
}

/// Counts cart rows for a user, bypassing the repository
pub async fn count_cart_items(pool: &SqlitePool, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM cart_items WHERE user_id = ?")
        .bind(user_id.to_string())
        .fetch_one(pool)
        .await
        .expect("Failed to count cart items")
}
