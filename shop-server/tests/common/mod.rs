#![allow(dead_code)]

//! Test infrastructure for shop-server API tests

use shop_auth::SessionStore;
use shop_db::UserLockRegistry;
use shop_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Low bcrypt cost to keep tests fast
const TEST_BCRYPT_COST: u32 = 4;

/// Create a test pool with in-memory SQLite
///
/// A single connection keeps every query on the same in-memory
/// database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/shop-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        sessions: SessionStore::new(),
        user_locks: UserLockRegistry::new(),
        bcrypt_cost: TEST_BCRYPT_COST,
    }
}

/// Sign up a user through the API and return the response body
pub async fn signup_user(state: &AppState, username: &str, email: &str, password: &str) {
    let app = build_router(state.clone());

    let body = serde_json::json!({
        "username": username,
        "email": email,
        "password": password,
        "confirm_password": password,
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/signup")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Log a user in through the API and return the session token
pub async fn login_user(state: &AppState, email: &str, password: &str) -> String {
    let app = build_router(state.clone());

    let body = serde_json::json!({
        "email": email,
        "password": password,
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["token"].as_str().unwrap().to_string()
}

/// Sign up and log in a user, returning the session token
pub async fn register_and_login(state: &AppState, username: &str, email: &str) -> String {
    signup_user(state, username, email, "hunter2!").await;
    login_user(state, email, "hunter2!").await
}

/// Submit a checkout for the given token and assert it succeeds
pub async fn checkout_items(state: &AppState, token: &str, items: serde_json::Value) {
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/cart/checkout")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::json!({ "items": items }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

/// Fetch the caller's cart items as JSON
pub async fn get_cart_items(state: &AppState, token: &str) -> serde_json::Value {
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/cart")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["items"].clone()
}
