//! A client-submitted cart line: one product name and quantity.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// One `{name, quantity}` pair from a submitted cart. Lines are validated
/// before any store interaction so a rejected submission leaves the
/// persisted cart untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    pub quantity: i64,
}

impl CartLine {
    /// Validate a single line: non-empty name, quantity >= 1
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "item name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.quantity < 1 {
            return Err(CoreError::InvalidQuantity {
                value: self.quantity,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Validate a whole submitted cart, failing on the first bad line
    #[track_caller]
    pub fn validate_all(lines: &[CartLine]) -> CoreErrorResult<()> {
        for line in lines {
            line.validate()?;
        }
        Ok(())
    }
}
