#![allow(dead_code)]

use shop_core::{CartLine, User};

/// Creates a test User with sensible defaults
pub fn create_test_user_model(username: &str, email: &str) -> User {
    User::new(
        username.to_string(),
        email.to_string(),
        "$2b$04$testhash".to_string(),
    )
}

/// A typical two-line submitted cart
pub fn pen_and_pencil() -> Vec<CartLine> {
    vec![
        CartLine {
            name: "pen".to_string(),
            quantity: 2,
        },
        CartLine {
            name: "pencil".to_string(),
            quantity: 1,
        },
    ]
}
