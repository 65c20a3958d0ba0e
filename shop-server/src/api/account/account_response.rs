use crate::{CartItemDto, UserDto};

use serde::{Deserialize, Serialize};

/// Response body for GET /api/v1/account
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub user: UserDto,
    pub cart_items: Vec<CartItemDto>,
}
