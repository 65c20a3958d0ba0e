//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. The machine codes follow the
//! domain's error taxonomy: INVALID_REQUEST (no usable session),
//! INVALID_QUANTITY, USER_NOT_FOUND, CONFLICT, STORE_UNAVAILABLE.

use shop_auth::AuthError;
use shop_core::CoreError;
use shop_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "INVALID_QUANTITY")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unauthenticated session on a mutating operation (401)
    #[error("Invalid request: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Login with credentials that do not check out (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Non-positive quantity submitted (400)
    #[error("Invalid quantity: {value} {location}")]
    InvalidQuantity { value: i64, location: ErrorLocation },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Session identity no longer resolves to a stored user (404)
    #[error("User not found: {message} {location}")]
    UserNotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Unique constraint conflict, e.g. duplicate email at signup (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Persistence failure; reconciliation was rolled back (500)
    #[error("Store unavailable: {message} {location}")]
    StoreUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found<S: Into<String>>(message: S) -> Self {
        Self::UserNotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::InvalidRequest { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: "invalid email or password".into(),
                    field: None,
                },
            ),
            ApiError::InvalidQuantity { value, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_QUANTITY".into(),
                    message: format!("quantity must be a positive integer, got {}", value),
                    field: Some("quantity".into()),
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::UserNotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "USER_NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Conflict { message, field, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field,
                },
            ),
            ApiError::StoreUnavailable { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "STORE_UNAVAILABLE".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidQuantity { value, .. } => ApiError::InvalidQuantity {
                value,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Log the database error for debugging
        log::error!("Database error: {}", e);

        match e {
            DbError::UserNotFound { user_id, .. } => ApiError::UserNotFound {
                message: format!("User {} not found", user_id),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::UniqueViolation { field, .. } => ApiError::Conflict {
                message: format!("{} already exists", field),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
            // Don't expose internal database details to clients
            DbError::Sqlx { .. } | DbError::Decode { .. } => {
                ApiError::StoreUnavailable {
                    message: "Store operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingHeader { .. }
            | AuthError::InvalidScheme { .. }
            | AuthError::UnknownToken { .. } => ApiError::InvalidRequest {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Hash { .. } => {
                log::error!("Auth error: {}", e);
                ApiError::Internal {
                    message: "Credential processing failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
