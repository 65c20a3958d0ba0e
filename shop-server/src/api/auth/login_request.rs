use serde::{Deserialize, Serialize};

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
