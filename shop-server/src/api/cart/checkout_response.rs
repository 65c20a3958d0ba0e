use serde::{Deserialize, Serialize};

/// Response body for a completed checkout
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub message: String,
    pub item_count: usize,
}
