use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;

use super::errors::PaymentError;

pub const DEFAULT_CURRENCY: &str = "dkk";

/// Amount expressed in the currency's minor unit (øre for DKK).
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: i64,
    pub currency: String,
}

impl PaymentRequest {
    pub fn from_amount(amount: Decimal) -> Result<Self, PaymentError> {
        if amount <= Decimal::ZERO {
            return Err(PaymentError::InvalidAmount);
        }

        let minor = (amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(PaymentError::InvalidAmount)?;

        Ok(Self {
            amount: minor,
            currency: DEFAULT_CURRENCY.to_string(),
        })
    }
}

/// Handle returned by the backend for confirming the payment with the card
/// processor.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSession {
    pub client_secret: String,
}
