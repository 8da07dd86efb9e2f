//! Todo Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the todo
//! list and filter. Every change goes through `store_dispatch`, which runs
//! the reducer and writes the snapshot when the list changed.

use leptos::prelude::*;
use reactive_stores::Store;
use widget_core::{Filter, Todo, TodoAction, TodoCounts, TodoState};

use crate::storage;

/// Todo widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Newest first
    pub todos: Vec<Todo>,
    /// Active view filter
    pub filter: Filter,
    /// Local storage key the list is saved under
    pub storage_key: String,
}

impl AppState {
    /// Load the saved list from local storage
    pub fn restore(storage_key: &str) -> Self {
        let mut state = TodoState::default();
        state.apply(TodoAction::Replace(storage::load_todos(storage_key)));
        Self {
            todos: state.todos,
            filter: state.filter,
            storage_key: storage_key.to_string(),
        }
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

/// Apply an action; persist if it changed the list
pub fn store_dispatch(store: &AppStore, action: TodoAction) {
    let touches_list = action.touches_list();
    let mut state = TodoState {
        todos: store.todos().get_untracked(),
        filter: store.filter().get_untracked(),
    };
    if !storage::dispatch_todos(&mut state, &store.storage_key().get_untracked(), action) {
        return;
    }

    if touches_list {
        *store.todos().write() = state.todos;
    } else {
        *store.filter().write() = state.filter;
    }
}

/// Todos visible under the current filter (tracked)
pub fn store_visible_todos(store: &AppStore) -> Vec<Todo> {
    let state = TodoState {
        todos: store.todos().get(),
        filter: store.filter().get(),
    };
    state.visible().cloned().collect()
}

/// Totals for badges and footer (tracked)
pub fn store_counts(store: &AppStore) -> TodoCounts {
    TodoState::new(store.todos().get()).counts()
}
