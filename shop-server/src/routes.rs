use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Auth endpoints
        .route("/api/v1/auth/signup", post(api::auth::auth::signup))
        .route("/api/v1/auth/login", post(api::auth::auth::login))
        .route("/api/v1/auth/logout", post(api::auth::auth::logout))
        // Account endpoints
        .route(
            "/api/v1/account",
            get(api::account::account::get_account)
                .patch(api::account::account::update_account)
                .delete(api::account::account::delete_account),
        )
        // Cart endpoints
        .route("/api/v1/cart", get(api::cart::cart::get_cart))
        .route("/api/v1/cart/checkout", post(api::cart::cart::checkout))
        .route(
            "/api/v1/cart/items/{name}",
            delete(api::cart::cart::remove_item).put(api::cart::cart::update_item_quantity),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
