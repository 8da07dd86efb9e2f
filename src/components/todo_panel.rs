//! Todo Panel Component
//!
//! The todo widget: form, filter tabs, list and footer.

use leptos::prelude::*;
use widget_core::TodoAction;

use crate::components::{FilterTabs, TodoForm, TodoList};
use crate::store::{store_counts, store_dispatch, use_app_store};

#[component]
pub fn TodoPanel() -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| store_counts(&store));

    view! {
        <section class="widget todo-panel">
            <header class="widget-header">
                <h2>"Todo Master"</h2>
                <p class="widget-subtitle">"Organize your life, one task at a time"</p>
            </header>

            <TodoForm />
            <FilterTabs />
            <TodoList />

            <Show when=move || { counts.get().completed > 0 }>
                <button
                    class="clear-completed-btn"
                    on:click=move |_| store_dispatch(&store, TodoAction::ClearCompleted)
                >
                    {move || format!("Clear Completed ({})", counts.get().completed)}
                </button>
            </Show>

            <Show when=move || { counts.get().total > 0 }>
                <p class="todo-stats">
                    {move || {
                        let c = counts.get();
                        format!("{} of {} tasks remaining", c.active, c.total)
                    }}
                </p>
            </Show>
        </section>
    }
}
