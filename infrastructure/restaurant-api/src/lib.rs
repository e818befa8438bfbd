pub mod client;
pub mod dto;
pub mod menu_gateway;
pub mod order_gateway;
pub mod payment_gateway;
pub mod rating_gateway;
pub mod restaurant_gateway;
