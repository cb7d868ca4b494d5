//! Editor UI State Store
//!
//! Uses Leptos reactive_stores for the state that is not part of the form
//! model itself.

use leptos::prelude::*;
use reactive_stores::Store;

/// Validation outcome and notification trace
#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    /// Messages from the last validation run
    pub errors: Vec<String>,
    /// Whether validation has run since the last clear
    pub validated: bool,
    /// Name of the most recent notification
    pub last_event: Option<String>,
}

/// Type alias for the store
pub type EditorStore = Store<EditorState>;

/// Get the editor store from context
pub fn use_editor_store() -> EditorStore {
    expect_context::<EditorStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a validation run
pub fn store_set_errors(store: &EditorStore, errors: Vec<String>) {
    *store.errors().write() = errors;
    *store.validated().write() = true;
}

/// Drop validation results
pub fn store_clear_errors(store: &EditorStore) {
    store.errors().write().clear();
    *store.validated().write() = false;
}

/// Remember the last notification fired by the editor
pub fn store_record_event(store: &EditorStore, event: &str) {
    *store.last_event().write() = Some(event.to_string());
}

pub fn store_errors(store: &EditorStore) -> Vec<String> {
    store.errors().get()
}

pub fn store_validated(store: &EditorStore) -> bool {
    store.validated().get()
}

pub fn store_last_event(store: &EditorStore) -> Option<String> {
    store.last_event().get()
}
