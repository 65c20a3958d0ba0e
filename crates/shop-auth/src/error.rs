use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Unknown or revoked session token {location}")]
    UnknownToken { location: ErrorLocation },

    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
