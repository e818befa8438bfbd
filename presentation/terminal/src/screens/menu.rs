use std::fmt::Write;
use std::sync::Arc;

use business::domain::cart::store::CartStore;
use business::domain::menu::errors::MenuError;
use business::domain::menu::model::RestaurantMenu;
use business::domain::menu::use_cases::get_restaurant_menu::{
    GetRestaurantMenuParams, GetRestaurantMenuUseCase,
};
use business::domain::shared::value_objects::{MenuItemId, RestaurantId};
use business::domain::tag_preference::store::TagPreferenceStore;

use crate::alert::IntoAlert;
use crate::screens::format::{highlight_marker, price};
use crate::screens::item;

/// Menu of one restaurant. Keeps the last opened menu so items can be
/// inspected and added without another round trip.
pub struct MenuScreen {
    get_menu_use_case: Arc<dyn GetRestaurantMenuUseCase>,
    cart: Arc<CartStore>,
    tags: Arc<TagPreferenceStore>,
    open: Option<RestaurantMenu>,
}

impl MenuScreen {
    pub fn new(
        get_menu_use_case: Arc<dyn GetRestaurantMenuUseCase>,
        cart: Arc<CartStore>,
        tags: Arc<TagPreferenceStore>,
    ) -> Self {
        Self {
            get_menu_use_case,
            cart,
            tags,
            open: None,
        }
    }

    pub async fn open(&mut self, restaurant_id: RestaurantId) -> String {
        let params = GetRestaurantMenuParams { restaurant_id };
        match self.get_menu_use_case.execute(params).await {
            Ok(menu) => {
                // Orders are per restaurant; the store drops lines of another one.
                self.cart.set_restaurant_id(Some(restaurant_id));
                let out = self.render(&menu);
                self.open = Some(menu);
                out
            }
            Err(e) => {
                tracing::warn!("Menu of restaurant {restaurant_id} unavailable: {e}");
                e.into_alert().to_string()
            }
        }
    }

    pub fn item(&self, id: MenuItemId) -> String {
        let found = self.open.as_ref().and_then(|menu| menu.find_item(id));
        match found {
            Some((section, menu_item)) => item::render(
                section,
                menu_item,
                self.tags.highlight_for(menu_item.tags.as_slice()),
                self.cart.snapshot().line(id).map_or(0, |line| line.quantity),
            ),
            None => MenuError::ItemNotFound.into_alert().to_string(),
        }
    }

    pub fn add(&self, id: MenuItemId) -> String {
        let Some(menu) = self.open.as_ref() else {
            return MenuError::ItemNotFound.into_alert().to_string();
        };

        match menu.cart_item(id) {
            Ok(cart_item) => {
                let name = cart_item.name.clone();
                self.cart.add_item(cart_item);
                let cart = self.cart.snapshot();
                format!(
                    "Added {}. Cart: {} items, {}",
                    name,
                    cart.item_count(),
                    price(cart.total())
                )
            }
            Err(e) => e.into_alert().to_string(),
        }
    }

    fn render(&self, menu: &RestaurantMenu) -> String {
        let mut out = String::new();
        if menu.is_empty() {
            out.push_str("This restaurant has no menu yet.\n");
            return out;
        }

        for entry in &menu.menus {
            let _ = writeln!(out, "{}", entry.menu.name);
            for section in &entry.sections {
                let _ = writeln!(out, "  {}", section.section.name);
                for menu_item in &section.items {
                    let highlight = self.tags.highlight_for(menu_item.tags.as_slice());
                    let _ = write!(
                        out,
                        "  {}[{}] {}  {}",
                        highlight_marker(highlight),
                        menu_item.id,
                        menu_item.name,
                        price(menu_item.price)
                    );
                    if !menu_item.available {
                        out.push_str("  (sold out)");
                    }
                    out.push('\n');
                }
            }
        }
        out
    }
}
