use serde::{Deserialize, Serialize};

/// Request body for PATCH /api/v1/account
///
/// Absent or empty fields are left unchanged.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
