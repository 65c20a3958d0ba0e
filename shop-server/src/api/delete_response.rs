use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response body for a completed account deletion
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: Uuid,
    pub message: String,
}
