use std::fmt::Write;

use business::domain::menu::model::{MenuItem, MenuSection};
use business::domain::tag_preference::model::Highlight;

use crate::screens::format::price;

pub fn render(
    section: &MenuSection,
    item: &MenuItem,
    highlight: Highlight,
    in_cart: u32,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.name);
    let _ = writeln!(out, "Category: {}", section.name);
    let _ = writeln!(out, "Price: {}", price(item.price));

    if !item.tags.is_empty() {
        let preferred = match highlight {
            Highlight::Emphasized => " (matches your preferences)",
            Highlight::Normal => "",
        };
        let _ = writeln!(out, "Tags: {}{}", item.tags.join(", "), preferred);
    }
    if let Some(description) = &item.description {
        let _ = writeln!(out, "Description: {}", description);
    }
    if let Some(image_url) = &item.image_url {
        let _ = writeln!(out, "Image: {}", image_url);
    }
    if !item.available {
        out.push_str("Sold out\n");
    }
    if in_cart > 0 {
        let _ = writeln!(out, "In cart: {}", in_cart);
    }
    out
}
