#[allow(clippy::module_inception)]
pub mod account;
pub mod account_response;
pub mod update_account_request;
pub mod user_dto;
