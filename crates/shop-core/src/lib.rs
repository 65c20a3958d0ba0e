pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::cart_item::CartItem;
pub use models::cart_line::CartLine;
pub use models::user::User;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
