use crate::CartItemDto;

use serde::{Deserialize, Serialize};

/// Response body for GET /api/v1/cart
#[derive(Debug, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartItemDto>,
}
