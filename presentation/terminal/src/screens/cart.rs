use std::fmt::Write;
use std::sync::Arc;

use business::domain::cart::model::Cart;
use business::domain::cart::store::CartStore;
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::shared::value_objects::MenuItemId;

use crate::alert::IntoAlert;
use crate::screens::format::price;

pub struct CartScreen {
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    cart: Arc<CartStore>,
}

impl CartScreen {
    pub fn new(place_order_use_case: Arc<dyn PlaceOrderUseCase>, cart: Arc<CartStore>) -> Self {
        Self {
            place_order_use_case,
            cart,
        }
    }

    pub fn show(&self) -> String {
        render(&self.cart.snapshot())
    }

    pub fn increase(&self, id: MenuItemId) -> String {
        self.cart.increase_quantity(id);
        self.show()
    }

    pub fn decrease(&self, id: MenuItemId) -> String {
        self.cart.decrease_quantity(id);
        self.show()
    }

    pub fn remove(&self, id: MenuItemId) -> String {
        self.cart.remove_item(id);
        self.show()
    }

    pub fn clear(&self) -> String {
        self.cart.clear_cart();
        self.show()
    }

    /// A confirmed order empties the cart; a failed one leaves it untouched.
    pub async fn order(&self) -> String {
        let params = PlaceOrderParams {
            cart: self.cart.snapshot(),
        };
        match self.place_order_use_case.execute(params).await {
            Ok(confirmation) => {
                self.cart.clear_cart();
                format!(
                    "Order #{} placed ({}).",
                    confirmation.id, confirmation.status
                )
            }
            Err(e) => {
                tracing::warn!("Order not placed: {e}");
                e.into_alert().to_string()
            }
        }
    }
}

fn render(cart: &Cart) -> String {
    let mut out = String::from("Your Cart\n");
    if cart.is_empty() {
        out.push_str("  Your cart is empty.\n");
        return out;
    }

    for line in cart.lines() {
        let _ = writeln!(
            out,
            "  [{}] {}  x{}  {}",
            line.item_id,
            line.name,
            line.quantity,
            price(line.line_total())
        );
    }
    let _ = writeln!(out, "Total: {}", price(cart.total()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::cart::model::CartItem;
    use business::domain::errors::GatewayError;
    use business::domain::order::errors::OrderError;
    use business::domain::order::model::OrderConfirmation;
    use business::domain::shared::value_objects::RestaurantId;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub PlaceOrder {}

        #[async_trait]
        impl PlaceOrderUseCase for PlaceOrder {
            async fn execute(&self, params: PlaceOrderParams) -> Result<OrderConfirmation, OrderError>;
        }
    }

    fn filled_cart() -> Arc<CartStore> {
        let cart = Arc::new(CartStore::new());
        cart.set_restaurant_id(Some(RestaurantId::new(1)));
        cart.add_item(CartItem::new(MenuItemId::new(1), "Burger", Decimal::new(50, 0)));
        cart.add_item(CartItem::new(MenuItemId::new(2), "Fries", Decimal::new(25, 0)));
        cart
    }

    #[test]
    fn should_render_lines_and_total() {
        let screen = CartScreen::new(Arc::new(MockPlaceOrder::new()), filled_cart());

        let output = screen.increase(MenuItemId::new(1));

        assert_eq!(
            output,
            "Your Cart\n  [1] Burger  x2  100.00 DKK\n  [2] Fries  x1  25.00 DKK\nTotal: 125.00 DKK\n"
        );
    }

    #[test]
    fn should_show_empty_cart_after_last_decrease() {
        let screen = CartScreen::new(Arc::new(MockPlaceOrder::new()), filled_cart());

        screen.remove(MenuItemId::new(2));
        let output = screen.decrease(MenuItemId::new(1));

        assert_eq!(output, "Your Cart\n  Your cart is empty.\n");
    }

    #[tokio::test]
    async fn should_clear_cart_after_confirmed_order() {
        let mut use_case = MockPlaceOrder::new();
        use_case
            .expect_execute()
            .withf(|params| params.cart.item_count() == 2)
            .times(1)
            .returning(|_| {
                Ok(OrderConfirmation {
                    id: 17,
                    status: "received".to_string(),
                })
            });
        let cart = filled_cart();
        let screen = CartScreen::new(Arc::new(use_case), cart.clone());

        let output = screen.order().await;

        assert_eq!(output, "Order #17 placed (received).");
        assert!(cart.snapshot().is_empty());
    }

    #[tokio::test]
    async fn should_keep_cart_when_order_fails() {
        let mut use_case = MockPlaceOrder::new();
        use_case
            .expect_execute()
            .returning(|_| Err(OrderError::Gateway(GatewayError::UnexpectedStatus(500))));
        let cart = filled_cart();
        let screen = CartScreen::new(Arc::new(use_case), cart.clone());

        let output = screen.order().await;

        assert!(output.contains("gateway.unexpected_status"));
        assert_eq!(cart.snapshot().item_count(), 2);
    }
}
