use crate::UserDto;

use serde::{Deserialize, Serialize};

/// Response body for a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserDto,
}
