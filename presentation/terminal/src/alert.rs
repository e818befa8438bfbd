use std::fmt;

use business::domain::errors::GatewayError;
use business::domain::menu::errors::MenuError;
use business::domain::order::errors::OrderError;
use business::domain::payment::errors::PaymentError;
use business::domain::rating::errors::RatingError;
use business::domain::restaurant::errors::RestaurantError;
use business::domain::scan::errors::ScanError;

/// User-visible notification raised when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Code-style identifier of the underlying error.
    pub code: String,
}

impl Alert {
    fn new(title: &str, message: &str, code: impl fmt::Display) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            code: code.to_string(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[!] {}: {} ({})", self.title, self.message, self.code)
    }
}

pub trait IntoAlert {
    fn into_alert(self) -> Alert;
}

impl IntoAlert for GatewayError {
    fn into_alert(self) -> Alert {
        let message = match &self {
            GatewayError::Unreachable => "The restaurant service cannot be reached.",
            GatewayError::Timeout => "The restaurant service took too long to answer.",
            GatewayError::UnexpectedStatus(_) => "The restaurant service refused the request.",
            GatewayError::MalformedResponse => "The restaurant service sent an unreadable answer.",
            GatewayError::NotFound => "The requested data does not exist.",
        };
        Alert::new("Connection problem", message, self)
    }
}

impl IntoAlert for RestaurantError {
    fn into_alert(self) -> Alert {
        match self {
            RestaurantError::NotFound => Alert::new(
                "Not found",
                "This restaurant does not exist.",
                RestaurantError::NotFound,
            ),
            RestaurantError::Gateway(e) => e.into_alert(),
        }
    }
}

impl IntoAlert for MenuError {
    fn into_alert(self) -> Alert {
        match self {
            MenuError::ItemNotFound => Alert::new(
                "Not on the menu",
                "This item is not on the open menu.",
                MenuError::ItemNotFound,
            ),
            MenuError::ItemUnavailable => Alert::new(
                "Sold out",
                "This item cannot be ordered right now.",
                MenuError::ItemUnavailable,
            ),
            MenuError::Gateway(e) => e.into_alert(),
        }
    }
}

impl IntoAlert for RatingError {
    fn into_alert(self) -> Alert {
        match self {
            RatingError::OutOfRange => Alert::new(
                "Invalid rating",
                "Pick a rating from 1 to 5.",
                RatingError::OutOfRange,
            ),
            RatingError::CommentEmpty => Alert::new(
                "Invalid rating",
                "Please write a comment.",
                RatingError::CommentEmpty,
            ),
            RatingError::Gateway(e) => e.into_alert(),
        }
    }
}

impl IntoAlert for OrderError {
    fn into_alert(self) -> Alert {
        match self {
            OrderError::EmptyCart => {
                Alert::new("Cannot order", "Your cart is empty.", OrderError::EmptyCart)
            }
            OrderError::MissingRestaurant => Alert::new(
                "Cannot order",
                "Open a restaurant menu before ordering.",
                OrderError::MissingRestaurant,
            ),
            OrderError::Gateway(e) => e.into_alert(),
        }
    }
}

impl IntoAlert for PaymentError {
    fn into_alert(self) -> Alert {
        match self {
            PaymentError::InvalidAmount => Alert::new(
                "Payment failed",
                "There is nothing to pay.",
                PaymentError::InvalidAmount,
            ),
            PaymentError::Gateway(e) => e.into_alert(),
        }
    }
}

impl IntoAlert for ScanError {
    fn into_alert(self) -> Alert {
        let message = match &self {
            ScanError::InvalidLink => "This QR code does not contain a link.",
            ScanError::UnsupportedScheme => "This QR code cannot be opened.",
        };
        Alert::new("Unknown code", message, self)
    }
}
