use serde::{Deserialize, Serialize};

/// Request body for POST /api/v1/auth/signup
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
