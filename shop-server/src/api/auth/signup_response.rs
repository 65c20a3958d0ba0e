use crate::UserDto;

use serde::{Deserialize, Serialize};

/// Response body for a successful signup
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user: UserDto,
}
