pub mod cart_item;
pub mod cart_line;
pub mod user;
