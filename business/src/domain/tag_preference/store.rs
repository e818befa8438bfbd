use tokio::sync::watch;

use crate::domain::shared::store::Store;

use super::model::{Highlight, TagPreferenceSet};

#[derive(Default)]
pub struct TagPreferenceStore {
    state: Store<TagPreferenceSet>,
}

impl TagPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_tag(&self, tag: &str) {
        self.state.update(|preferences| preferences.toggle(tag));
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.state.read(|preferences| preferences.contains(tag))
    }

    pub fn highlight_for<S: AsRef<str>>(&self, tags: &[S]) -> Highlight {
        self.state.read(|preferences| preferences.highlight_for(tags))
    }

    pub fn snapshot(&self) -> TagPreferenceSet {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<TagPreferenceSet> {
        self.state.subscribe()
    }
}
