//! Cart REST API handlers
//!
//! Checkout replaces the stored cart with the submitted lines in a
//! single transaction, serialized per user so concurrent submissions
//! cannot interleave. Quantity updates and removals for a name not in
//! the cart succeed without changing anything.

use crate::{
    ApiResult, AppState, CartItemDto, CartResponse, CheckoutRequest, CheckoutResponse,
    MessageResponse, Session, UpdateQuantityRequest,
};

use shop_core::CartLine;
use shop_db::CartRepository;

use axum::{
    Json,
    extract::{Path, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/cart
///
/// Return the caller's current cart contents
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<CartResponse>> {
    let repo = CartRepository::new(state.pool.clone());
    let items = repo.items_for_user(session.identity.user_id).await?;

    Ok(Json(CartResponse {
        items: items.into_iter().map(CartItemDto::from).collect(),
    }))
}

/// POST /api/v1/cart/checkout
///
/// Replace the caller's stored cart with the submitted lines
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CheckoutRequest>,
) -> ApiResult<Json<CheckoutResponse>> {
    let user_id = session.identity.user_id;

    // Reject the whole submission before touching the store
    CartLine::validate_all(&request.items)?;

    // One reconciliation at a time per user; the guard is held across
    // the transaction.
    let _guard = state.user_locks.acquire(user_id).await;

    let repo = CartRepository::new(state.pool.clone());
    repo.replace_items(user_id, &request.items).await?;

    log::info!(
        "Checked out {} item(s) for user {}",
        request.items.len(),
        user_id
    );

    Ok(Json(CheckoutResponse {
        message: "checkout complete".to_string(),
        item_count: request.items.len(),
    }))
}

/// PUT /api/v1/cart/items/{name}
///
/// Set the quantity of a single named item
pub async fn update_item_quantity(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let line = CartLine {
        name: name.clone(),
        quantity: request.quantity,
    };
    line.validate()?;

    let repo = CartRepository::new(state.pool.clone());
    repo.update_quantity(session.identity.user_id, &name, request.quantity)
        .await?;

    Ok(Json(MessageResponse::new("quantity updated")))
}

/// DELETE /api/v1/cart/items/{name}
///
/// Remove a single named item from the cart
pub async fn remove_item(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let repo = CartRepository::new(state.pool.clone());
    repo.remove_item(session.identity.user_id, &name).await?;

    Ok(Json(MessageResponse::new("item removed")))
}
