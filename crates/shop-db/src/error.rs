use shop_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("User not found: {user_id} {location}")]
    UserNotFound {
        user_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on {field} {location}")]
    UniqueViolation {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Row decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn user_not_found(user_id: Uuid) -> Self {
        Self::UserNotFound {
            user_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
