use shop_core::User;

use serde::{Deserialize, Serialize};

/// User DTO for JSON serialization
///
/// Never carries the password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
