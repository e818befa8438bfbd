use rust_decimal::Decimal;

use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{MenuItemId, RestaurantId};

use super::errors::OrderError;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub restaurant_id: RestaurantId,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
}

impl OrderRequest {
    pub fn from_cart(cart: &Cart) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let restaurant_id = cart.restaurant_id().ok_or(OrderError::MissingRestaurant)?;

        let lines = cart
            .lines()
            .iter()
            .map(|line| OrderLine {
                item_id: line.item_id,
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();

        Ok(Self {
            restaurant_id,
            lines,
            total: cart.total(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub id: i64,
    pub status: String,
}
