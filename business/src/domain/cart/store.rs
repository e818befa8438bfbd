use rust_decimal::Decimal;
use tokio::sync::watch;

use crate::domain::shared::store::Store;
use crate::domain::shared::value_objects::{MenuItemId, RestaurantId};

use super::model::{Cart, CartItem};

/// Session cart shared by the menu, cart and payment screens.
///
/// Operations never fail; unknown ids are no-ops and do not notify observers.
#[derive(Default)]
pub struct CartStore {
    state: Store<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&self, item: CartItem) {
        self.state.update(|cart| cart.add_item(item));
    }

    pub fn increase_quantity(&self, id: MenuItemId) {
        self.state.update(|cart| cart.increase_quantity(id));
    }

    pub fn decrease_quantity(&self, id: MenuItemId) {
        self.state.update(|cart| cart.decrease_quantity(id));
    }

    pub fn remove_item(&self, id: MenuItemId) {
        self.state.update(|cart| cart.remove_item(id));
    }

    pub fn set_restaurant_id(&self, id: Option<RestaurantId>) {
        self.state.update(|cart| cart.set_restaurant_id(id));
    }

    pub fn clear_cart(&self) {
        self.state.update(Cart::clear);
    }

    pub fn snapshot(&self) -> Cart {
        self.state.snapshot()
    }

    pub fn total(&self) -> Decimal {
        self.state.read(Cart::total)
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: i64) -> CartItem {
        CartItem::new(MenuItemId::new(id), format!("Item {}", id), Decimal::new(10, 0))
    }

    #[test]
    fn should_add_burger_to_empty_cart() {
        let store = CartStore::new();

        store.add_item(CartItem::new(MenuItemId::new(1), "Burger", Decimal::new(50, 0)));

        let cart = store.snapshot();
        assert_eq!(cart.lines().len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.item_id, MenuItemId::new(1));
        assert_eq!(line.name, "Burger");
        assert_eq!(line.unit_price, Decimal::new(50, 0));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn should_apply_both_rapid_increments() {
        let store = CartStore::new();
        store.add_item(item(1));

        store.increase_quantity(MenuItemId::new(1));
        store.increase_quantity(MenuItemId::new(1));

        assert_eq!(store.snapshot().lines()[0].quantity, 3);
    }

    #[test]
    fn should_empty_cart_after_decreasing_to_zero() {
        let store = CartStore::new();
        store.add_item(item(1));
        store.add_item(item(1));

        store.decrease_quantity(MenuItemId::new(1));
        assert_eq!(store.snapshot().lines()[0].quantity, 1);

        store.decrease_quantity(MenuItemId::new(1));
        assert!(store.snapshot().is_empty());

        store.decrease_quantity(MenuItemId::new(1));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn should_not_notify_observers_on_noop() {
        let store = CartStore::new();
        let mut observer = store.subscribe();

        store.remove_item(MenuItemId::new(42));
        assert!(!observer.has_changed().unwrap());

        store.add_item(item(42));
        assert!(observer.has_changed().unwrap());
        assert_eq!(observer.borrow_and_update().item_count(), 1);
    }

    #[test]
    fn should_clear_cart_when_restaurant_changes() {
        let store = CartStore::new();
        store.set_restaurant_id(Some(RestaurantId::new(1)));
        store.add_item(item(1));

        store.set_restaurant_id(Some(RestaurantId::new(2)));

        let cart = store.snapshot();
        assert!(cart.is_empty());
        assert_eq!(cart.restaurant_id(), Some(RestaurantId::new(2)));
    }

    #[test]
    fn should_report_total_of_all_lines() {
        let store = CartStore::new();
        store.add_item(item(1));
        store.add_item(item(2));
        store.add_item(item(2));

        assert_eq!(store.total(), Decimal::new(30, 0));

        store.clear_cart();
        assert_eq!(store.total(), Decimal::ZERO);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i64),
        Increase(i64),
        Decrease(i64),
        Remove(i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..5).prop_map(Op::Add),
            (0i64..5).prop_map(Op::Increase),
            (0i64..5).prop_map(Op::Decrease),
            (0i64..5).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn quantity_equals_number_of_adds(id in 0i64..1000, adds in 1usize..50) {
            let store = CartStore::new();
            for _ in 0..adds {
                store.add_item(item(id));
            }

            let cart = store.snapshot();
            prop_assert_eq!(cart.lines().len(), 1);
            prop_assert_eq!(cart.lines()[0].quantity as usize, adds);
        }

        #[test]
        fn lines_never_hold_zero_quantity(ops in proptest::collection::vec(op_strategy(), 0..100)) {
            let store = CartStore::new();
            for op in ops {
                match op {
                    Op::Add(id) => store.add_item(item(id)),
                    Op::Increase(id) => store.increase_quantity(MenuItemId::new(id)),
                    Op::Decrease(id) => store.decrease_quantity(MenuItemId::new(id)),
                    Op::Remove(id) => store.remove_item(MenuItemId::new(id)),
                }
            }

            let cart = store.snapshot();
            prop_assert!(cart.lines().iter().all(|line| line.quantity >= 1));

            let mut ids: Vec<_> = cart.lines().iter().map(|line| line.item_id).collect();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), cart.lines().len());
        }
    }
}
