mod cart_line;
mod user;
