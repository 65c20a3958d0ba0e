use crate::{CartItem, User};

use uuid::Uuid;

#[test]
fn test_user_new() {
    let user = User::new(
        "alice".to_string(),
        "alice@example.com".to_string(),
        "$2b$12$hash".to_string(),
    );

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.password_hash, "$2b$12$hash");
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_cart_item_new_carries_owner() {
    let user_id = Uuid::new_v4();
    let item = CartItem::new(user_id, "pen".to_string(), 2);

    assert_eq!(item.user_id, user_id);
    assert_eq!(item.name, "pen");
    assert_eq!(item.quantity, 2);
}
