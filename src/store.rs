//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::{apply_preset, AlgorithmCatalog, PresetLibrary};
use crate::items::ItemCollection;
use crate::models::{ItemField, Outcome, Preset, SolveOutcome, SolveResult};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The instance being edited
    pub items: ItemCollection,
    pub catalog: AlgorithmCatalog,
    pub presets: PresetLibrary,
    /// Last single-algorithm result; what "export" saves
    pub current_result: Option<SolveResult>,
    /// Whatever fills the results area right now
    pub outcome: Option<Outcome>,
}

impl AppState {
    /// Seeded items with the configured starting capacity
    pub fn with_capacity(capacity: f64) -> Self {
        let mut state = Self::default();
        state.items.set_capacity(capacity);
        state
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_item(store: &AppStore) {
    store.items().write().add();
}

pub fn store_update_item(store: &AppStore, index: usize, field: ItemField) {
    store.items().write().update(index, field);
}

pub fn store_remove_item(store: &AppStore, index: usize) {
    store.items().write().remove(index);
}

pub fn store_clear_items(store: &AppStore) {
    store.items().write().clear();
}

pub fn store_set_capacity(store: &AppStore, capacity: f64) {
    store.items().write().set_capacity(capacity);
}

pub fn store_apply_preset(store: &AppStore, preset: &Preset) {
    apply_preset(&mut store.items().write(), preset);
}

pub fn store_select_algorithm(store: &AppStore, id: &str) {
    store.catalog().write().select(id);
}

/// Show a single-algorithm result; it becomes the exportable result
pub fn store_show_solved(store: &AppStore, outcome: SolveOutcome) {
    store.current_result().set(Some(outcome.result.clone()));
    store.outcome().set(Some(Outcome::Solved(outcome)));
}

/// Show a comparison. The last single result stays exportable.
pub fn store_show_compared(store: &AppStore, results: Vec<SolveResult>) {
    store.outcome().set(Some(Outcome::Compared(results)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_capacity_from_config() {
        let state = AppState::with_capacity(80.0);

        assert_eq!(state.items.capacity(), 80.0);
        assert_eq!(state.items.len(), 3);
        assert!(state.outcome.is_none());
    }
}
