pub mod error;
pub mod repositories;
pub mod user_locks;

pub use error::{DbError, Result};
pub use repositories::cart_repository::CartRepository;
pub use repositories::user_repository::UserRepository;
pub use user_locks::UserLockRegistry;
