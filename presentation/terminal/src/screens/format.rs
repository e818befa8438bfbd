use rust_decimal::Decimal;

use business::domain::tag_preference::model::Highlight;

pub fn price(amount: Decimal) -> String {
    format!("{:.2} DKK", amount)
}

/// Prefix marking rows that match the user's preferred tags.
pub fn highlight_marker(highlight: Highlight) -> &'static str {
    match highlight {
        Highlight::Emphasized => "» ",
        Highlight::Normal => "  ",
    }
}
