//! Account REST API handlers
//!
//! Operations are scoped to the identity carried by the caller's
//! session token. Partial profile updates leave absent fields
//! unchanged; deleting an account removes its cart rows in the same
//! transaction and revokes every session issued to the user.

use crate::{
    AccountResponse, ApiError, ApiResult, AppState, CartItemDto, DeleteResponse, Session,
    UpdateAccountRequest, UserDto,
};

use shop_auth::hash_password;
use shop_db::{CartRepository, UserRepository};

use axum::{Json, extract::State};

/// Treat empty or whitespace-only strings as absent
fn normalize(field: Option<String>) -> Option<String> {
    field.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/account
///
/// Return the caller's profile and current cart contents
pub async fn get_account(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<AccountResponse>> {
    let user_id = session.identity.user_id;

    let users = UserRepository::new(state.pool.clone());
    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(format!("User {} not found", user_id)))?;

    let carts = CartRepository::new(state.pool.clone());
    let items = carts.items_for_user(user_id).await?;

    Ok(Json(AccountResponse {
        user: UserDto::from(user),
        cart_items: items.into_iter().map(CartItemDto::from).collect(),
    }))
}

/// PATCH /api/v1/account
///
/// Partially update the caller's profile
pub async fn update_account(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateAccountRequest>,
) -> ApiResult<Json<UserDto>> {
    let user_id = session.identity.user_id;

    let username = normalize(request.username);
    let email = normalize(request.email);
    let password_hash = match normalize(request.password) {
        Some(password) => Some(hash_password(&password, state.bcrypt_cost)?),
        None => None,
    };

    if let Some(email) = &email {
        if !email.contains('@') {
            return Err(ApiError::validation(
                "email must be a valid address",
                Some("email"),
            ));
        }
    }

    let repo = UserRepository::new(state.pool.clone());
    repo.update_profile(
        user_id,
        username.as_deref(),
        email.as_deref(),
        password_hash.as_deref(),
    )
    .await?;

    let updated = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::user_not_found(format!("User {} not found", user_id)))?;

    log::info!("Updated profile for user {}", user_id);

    Ok(Json(UserDto::from(updated)))
}

/// DELETE /api/v1/account
///
/// Delete the caller's account and everything attached to it
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = session.identity.user_id;

    // Hold the per-user lock so deletion cannot interleave with an
    // in-flight cart reconciliation for the same user.
    let _guard = state.user_locks.acquire(user_id).await;

    let repo = UserRepository::new(state.pool.clone());
    repo.delete(user_id).await?;

    state.sessions.revoke_all_for_user(user_id).await;

    log::info!("Deleted account {}", user_id);

    Ok(Json(DeleteResponse {
        id: user_id,
        message: "account deleted".to_string(),
    }))
}
