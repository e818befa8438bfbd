use std::sync::Arc;

use business::domain::cart::store::CartStore;
use business::domain::payment::use_cases::create_session::{
    CreatePaymentSessionParams, CreatePaymentSessionUseCase,
};

use crate::alert::IntoAlert;
use crate::screens::format::price;

/// Starts a card payment for the cart total. Card entry and confirmation
/// happen in the payment provider's own flow.
pub struct PaymentScreen {
    create_session_use_case: Arc<dyn CreatePaymentSessionUseCase>,
    cart: Arc<CartStore>,
}

impl PaymentScreen {
    pub fn new(
        create_session_use_case: Arc<dyn CreatePaymentSessionUseCase>,
        cart: Arc<CartStore>,
    ) -> Self {
        Self {
            create_session_use_case,
            cart,
        }
    }

    pub async fn pay(&self) -> String {
        let amount = self.cart.total();
        let params = CreatePaymentSessionParams { amount };
        match self.create_session_use_case.execute(params).await {
            Ok(session) => format!(
                "Payment of {} ready (reference {}).",
                price(amount),
                reference(&session.client_secret)
            ),
            Err(e) => {
                tracing::warn!("Payment session not created: {e}");
                e.into_alert().to_string()
            }
        }
    }
}

/// The intent id is the part of the client secret before `_secret_`.
fn reference(client_secret: &str) -> &str {
    client_secret
        .split_once("_secret_")
        .map_or(client_secret, |(intent, _)| intent)
}
