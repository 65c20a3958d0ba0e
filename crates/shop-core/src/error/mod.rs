use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid quantity: {value} (must be a positive integer) {location}")]
    InvalidQuantity { value: i64, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
