//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Snapshots are
//! only ever replaced whole.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{HistorySnapshot, ListSnapshot};

/// Last applied server snapshots
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current list, as returned by `/get-current-list`
    pub list: ListSnapshot,
    /// Completed trips, as returned by `/get-history`
    pub history: HistorySnapshot,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_list(store: &AppStore, snapshot: ListSnapshot) {
    store.list().set(snapshot);
}

pub fn store_set_history(store: &AppStore, snapshot: HistorySnapshot) {
    store.history().set(snapshot);
}

/// Tracked read of the current list
pub fn store_list(store: &AppStore) -> ListSnapshot {
    store.list().get()
}

/// Untracked read, for event handlers
pub fn store_list_untracked(store: &AppStore) -> ListSnapshot {
    store.list().get_untracked()
}

/// Tracked reads of the list counters, without cloning the snapshot
pub fn store_counts(store: &AppStore) -> (u32, u32) {
    store.list().with(|list| (list.total_items, list.checked_items))
}

/// Tracked read of the history
pub fn store_history(store: &AppStore) -> HistorySnapshot {
    store.history().get()
}
