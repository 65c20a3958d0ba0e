pub mod error;
pub mod password;
pub mod session;

pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use session::{SessionIdentity, SessionStore};

#[cfg(test)]
mod tests;
