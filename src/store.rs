//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. View-state flags
//! (collapsed section, busy submit) live here as explicit values so the
//! render functions never reach for ambient globals.

use leptos::prelude::*;
use reactive_stores::Store;
use std::collections::HashSet;

/// Global popup state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cards the user wants considered for recommendations
    pub selected: HashSet<String>,
    /// Card-selection section collapsed flag
    pub cards_collapsed: bool,
    /// A recommendation request is outstanding; submit stays disabled
    pub busy: bool,
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

/// Replace the whole selection
pub fn store_set_selection(store: &AppStore, selected: HashSet<String>) {
    store.selected().set(selected);
}

/// Flip one card in or out of the selection; returns the new snapshot so
/// the caller can persist it
pub fn store_toggle_card(store: &AppStore, name: &str) -> HashSet<String> {
    let mut selected = store.selected().get();
    if !selected.remove(name) {
        selected.insert(name.to_string());
    }
    store.selected().set(selected.clone());
    selected
}
