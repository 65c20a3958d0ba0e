pub mod cart_repository;
pub mod user_repository;
