use tokio::sync::watch;

use crate::domain::shared::store::Store;
use crate::domain::shared::value_objects::RestaurantId;

/// Map pin currently selected on the home screen, if any.
#[derive(Default)]
pub struct MarkerSelectionStore {
    state: Store<Option<RestaurantId>>,
}

impl MarkerSelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, id: RestaurantId) {
        self.state.update(|selected| {
            let changed = *selected != Some(id);
            *selected = Some(id);
            changed
        });
    }

    /// Tapping the map background clears the selection.
    pub fn clear(&self) {
        self.state.update(|selected| selected.take().is_some());
    }

    pub fn selected(&self) -> Option<RestaurantId> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<RestaurantId>> {
        self.state.subscribe()
    }
}
