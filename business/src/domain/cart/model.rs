use rust_decimal::Decimal;

use crate::domain::shared::value_objects::{MenuItemId, RestaurantId};

/// Descriptor of a menu item handed to the cart when the user taps "add".
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: MenuItemId,
    pub name: String,
    pub unit_price: Decimal,
}

impl CartItem {
    /// Negative prices are normalised to zero.
    pub fn new(id: MenuItemId, name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price: unit_price.max(Decimal::ZERO),
        }
    }
}

/// One row of the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Insertion-ordered cart for a single restaurant.
///
/// Every mutator returns whether the cart changed, which lets the store skip
/// notifying observers on no-ops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    restaurant_id: Option<RestaurantId>,
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restaurant_id(&self) -> Option<RestaurantId> {
        self.restaurant_id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn add_item(&mut self, item: CartItem) -> bool {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return true;
        }

        self.lines.push(CartLine {
            item_id: item.id,
            name: item.name,
            unit_price: item.unit_price.max(Decimal::ZERO),
            quantity: 1,
        });
        true
    }

    pub fn increase_quantity(&mut self, id: MenuItemId) -> bool {
        match self.lines.iter_mut().find(|line| line.item_id == id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Decrements the line; a line that would drop to zero is removed.
    pub fn decrease_quantity(&mut self, id: MenuItemId) -> bool {
        let Some(index) = self.lines.iter().position(|line| line.item_id == id) else {
            return false;
        };

        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
        } else {
            self.lines.remove(index);
        }
        true
    }

    pub fn remove_item(&mut self, id: MenuItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.item_id != id);
        self.lines.len() != before
    }

    /// Switching away from a restaurant drops its lines. Adopting a
    /// restaurant for a cart that had none keeps the lines.
    pub fn set_restaurant_id(&mut self, id: Option<RestaurantId>) -> bool {
        if self.restaurant_id == id {
            return false;
        }

        if self.restaurant_id.is_some() {
            self.lines.clear();
        }
        self.restaurant_id = id;
        true
    }

    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }
}
