//! Todo List Component
//!
//! Renders the todos visible under the current filter, or a per-filter
//! empty message.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{store_visible_todos, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();
    let visible = Memo::new(move |_| store_visible_todos(&store));

    view! {
        <div class="todo-list">
            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    let (title, hint) = store.filter().get().empty_message();
                    view! {
                        <div class="todo-empty">
                            <p class="todo-empty-title">{title}</p>
                            <p class="todo-empty-hint">{hint}</p>
                        </div>
                    }
                }
            >
                <For
                    each=move || visible.get()
                    // Completion and text are part of the key so edited rows re-render
                    key=|todo| (todo.id, todo.completed, todo.text.clone())
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </Show>
        </div>
    }
}
