//! Password hashing via bcrypt. Plaintext passwords exist only on the
//! wire and on the stack; everything persisted is a bcrypt hash.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Hash a plaintext password with the given bcrypt cost factor
#[track_caller]
pub fn hash_password(plaintext: &str, cost: u32) -> AuthErrorResult<String> {
    let location = ErrorLocation::from(Location::caller());

    bcrypt::hash(plaintext, cost).map_err(|e| AuthError::Hash {
        message: e.to_string(),
        location,
    })
}

/// Check a plaintext password against a stored bcrypt hash
#[track_caller]
pub fn verify_password(plaintext: &str, hash: &str) -> AuthErrorResult<bool> {
    let location = ErrorLocation::from(Location::caller());

    bcrypt::verify(plaintext, hash).map_err(|e| AuthError::Hash {
        message: e.to_string(),
        location,
    })
}
