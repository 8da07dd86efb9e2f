//! Pocket Widgets App
//!
//! Main application component: password generator beside the todo list.

use leptos::prelude::*;
use reactive_stores::Store;
use widget_core::Settings;

use crate::components::{PasswordGenerator, TodoPanel};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(settings: Settings) -> impl IntoView {
    // Restore the todo list once, before anything renders
    let state = AppState::restore(&settings.storage_key);
    log::debug!("todo store ready with {} todos", state.todos.len());

    let default_password = settings.default_password;

    // Provide context to all children
    provide_context(AppContext::new(settings));
    provide_context(Store::new(state));

    view! {
        <div class="app-layout">
            <PasswordGenerator initial=default_password />
            <TodoPanel />
        </div>
    }
}
