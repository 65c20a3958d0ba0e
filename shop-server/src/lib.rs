pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    account::{
        account::{delete_account, get_account, update_account},
        account_response::AccountResponse,
        update_account_request::UpdateAccountRequest,
        user_dto::UserDto,
    },
    auth::{
        auth::{login, logout, signup},
        login_request::LoginRequest,
        session_response::SessionResponse,
        signup_request::SignupRequest,
        signup_response::SignupResponse,
    },
    cart::{
        cart::{checkout, get_cart, remove_item, update_item_quantity},
        cart_item_dto::CartItemDto,
        cart_response::CartResponse,
        checkout_request::CheckoutRequest,
        checkout_response::CheckoutResponse,
        update_quantity_request::UpdateQuantityRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::session::Session,
    message_response::MessageResponse,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
