use rust_decimal::Decimal;

use crate::domain::cart::model::CartItem;
use crate::domain::menu::errors::MenuError;
use crate::domain::shared::value_objects::{MenuItemId, RestaurantId};

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    pub id: i64,
    pub restaurant_id: RestaurantId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
}

/// A dish or drink as listed on a menu. Optional fields are absent when the
/// backend does not provide them.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub section_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub available: bool,
}

impl MenuItem {
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.id, self.name.clone(), self.price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionWithItems {
    pub section: MenuSection,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuWithSections {
    pub menu: Menu,
    pub sections: Vec<SectionWithItems>,
}

/// Every menu of one restaurant with its sections and items, in backend order.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantMenu {
    pub restaurant_id: RestaurantId,
    pub menus: Vec<MenuWithSections>,
}

impl RestaurantMenu {
    /// Joins the flat backend collections; anything not reachable from one of
    /// the restaurant's menus is dropped.
    pub fn assemble(
        restaurant_id: RestaurantId,
        menus: Vec<Menu>,
        sections: Vec<MenuSection>,
        items: Vec<MenuItem>,
    ) -> Self {
        let menus = menus
            .into_iter()
            .filter(|menu| menu.restaurant_id == restaurant_id)
            .map(|menu| {
                let sections = sections
                    .iter()
                    .filter(|section| section.menu_id == menu.id)
                    .map(|section| SectionWithItems {
                        section: section.clone(),
                        items: items
                            .iter()
                            .filter(|item| item.section_id == section.id)
                            .cloned()
                            .collect(),
                    })
                    .collect();
                MenuWithSections { menu, sections }
            })
            .collect();

        Self {
            restaurant_id,
            menus,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.menus
            .iter()
            .all(|menu| menu.sections.iter().all(|s| s.items.is_empty()))
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.menus
            .iter()
            .flat_map(|menu| menu.sections.iter())
            .flat_map(|section| section.items.iter())
    }

    /// Looks up an item together with the section it is listed in.
    pub fn find_item(&self, id: MenuItemId) -> Option<(&MenuSection, &MenuItem)> {
        self.menus
            .iter()
            .flat_map(|menu| menu.sections.iter())
            .find_map(|section| {
                section
                    .items
                    .iter()
                    .find(|item| item.id == id)
                    .map(|item| (&section.section, item))
            })
    }

    /// Descriptor for the cart, refusing items that are sold out.
    pub fn cart_item(&self, id: MenuItemId) -> Result<CartItem, MenuError> {
        let (_, item) = self.find_item(id).ok_or(MenuError::ItemNotFound)?;
        if !item.available {
            return Err(MenuError::ItemUnavailable);
        }
        Ok(item.to_cart_item())
    }
}
