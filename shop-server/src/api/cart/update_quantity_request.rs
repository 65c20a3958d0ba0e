use serde::{Deserialize, Serialize};

/// Request body for PUT /api/v1/cart/items/{name}
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}
