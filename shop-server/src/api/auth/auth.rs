//! Authentication REST API handlers
//!
//! Signup creates an account with a bcrypt password hash. Login
//! exchanges credentials for an opaque session token. Logout revokes
//! the presented token.

use crate::{
    ApiError, ApiResult, AppState, LoginRequest, MessageResponse, Session, SessionResponse,
    SignupRequest, SignupResponse, UserDto,
};

use shop_auth::{SessionIdentity, hash_password, verify_password};
use shop_core::User;
use shop_db::UserRepository;

use axum::{Json, extract::State, http::StatusCode};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/signup
///
/// Register a new account
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<SignupResponse>)> {
    let username = request.username.trim();
    let email = request.email.trim();

    if username.is_empty() {
        return Err(ApiError::validation(
            "username must not be empty",
            Some("username"),
        ));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::validation(
            "email must be a valid address",
            Some("email"),
        ));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation(
            "password must not be empty",
            Some("password"),
        ));
    }
    if request.password != request.confirm_password {
        return Err(ApiError::validation(
            "passwords do not match",
            Some("password"),
        ));
    }

    let password_hash = hash_password(&request.password, state.bcrypt_cost)?;
    let user = User::new(username.to_string(), email.to_string(), password_hash);

    let repo = UserRepository::new(state.pool.clone());
    repo.create(&user).await?;

    log::info!("Registered user {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            user: UserDto::from(user),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Exchange credentials for a session token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo
        .find_by_email(request.email.trim())
        .await?
        .ok_or_else(|| {
            log::warn!("Login attempt for unknown email");
            ApiError::invalid_credentials()
        })?;

    if !verify_password(&request.password, &user.password_hash)? {
        log::warn!("Failed login attempt for user {}", user.id);
        return Err(ApiError::invalid_credentials());
    }

    let token = state
        .sessions
        .create(SessionIdentity {
            user_id: user.id,
            email: user.email.clone(),
        })
        .await;

    log::info!("User {} logged in", user.id);

    Ok(Json(SessionResponse {
        token,
        user: UserDto::from(user),
    }))
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented session token
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<MessageResponse>> {
    state.sessions.revoke(&session.token).await;

    log::info!("User {} logged out", session.identity.user_id);

    Ok(Json(MessageResponse::new("logged out")))
}
