use shop_core::CartItem;

use serde::{Deserialize, Serialize};

/// Cart item DTO for JSON serialization
#[derive(Debug, Serialize, Deserialize)]
pub struct CartItemDto {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub created_at: i64,
}

impl From<CartItem> for CartItemDto {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            quantity: item.quantity,
            created_at: item.created_at.timestamp(),
        }
    }
}
