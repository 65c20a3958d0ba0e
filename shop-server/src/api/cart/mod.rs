#[allow(clippy::module_inception)]
pub mod cart;
pub mod cart_item_dto;
pub mod cart_response;
pub mod checkout_request;
pub mod checkout_response;
pub mod update_quantity_request;
