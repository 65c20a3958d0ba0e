pub mod account;
pub mod auth;
pub mod cart;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod message_response;
