use shop_core::CartLine;

use serde::{Deserialize, Serialize};

/// Request body for POST /api/v1/cart/checkout
///
/// Carries the full desired cart. The stored cart is replaced with
/// exactly these lines.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartLine>,
}
