//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use shop_auth::{AuthError, SessionIdentity};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the caller's session from the `Authorization` header
///
/// Expects `Authorization: Bearer <token>` where the token was issued
/// at login. Resolving the token yields the identity the operation is
/// scoped to; a missing, malformed, or unknown token rejects the
/// request before the handler runs.
pub struct Session {
    pub identity: SessionIdentity,
    pub token: String,
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value =
                parts
                    .headers
                    .get("authorization")
                    .ok_or(AuthError::MissingHeader {
                        location: ErrorLocation::from(Location::caller()),
                    })?;

            let token = header_value
                .to_str()
                .ok()
                .and_then(|value| value.strip_prefix("Bearer "))
                .ok_or(AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            match state.sessions.resolve(token).await {
                Some(identity) => {
                    log::debug!("Resolved session for user {}", identity.user_id);
                    Ok(Session {
                        identity,
                        token: token.to_string(),
                    })
                }
                None => {
                    log::warn!("Rejected request with unknown session token");
                    Err(AuthError::UnknownToken {
                        location: ErrorLocation::from(Location::caller()),
                    }
                    .into())
                }
            }
        }
    }
}
