//! Todo Item Component
//!
//! One row: completion checkbox, inline-editable text, edit and delete
//! buttons. Completed todos can't be edited.

use leptos::prelude::*;
use leptos::task::spawn_local;
use widget_core::{Todo, TodoAction};

use crate::context::{simulate_work, use_app_context};
use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let original = StoredValue::new(todo.text.clone());

    let (editable, set_editable) = signal(false);
    let (msg, set_msg) = signal(todo.text);
    let (deleting, set_deleting) = signal(false);

    // Blank edits fall back to the saved text
    let save_edit = move || {
        let text = msg.get_untracked();
        if text.trim().is_empty() {
            set_msg.set(original.get_value());
        } else {
            set_msg.set(text.trim().to_string());
            store_dispatch(&store, TodoAction::Update { id, text });
        }
        set_editable.set(false);
    };

    let cancel_edit = move || {
        set_msg.set(original.get_value());
        set_editable.set(false);
    };

    let on_delete = move |_| {
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            simulate_work(ctx.delete_delay_ms()).await;
            store_dispatch(&store, TodoAction::Delete { id });
        });
    };

    let row_class = move || {
        let mut class = String::from("todo-item");
        if completed {
            class.push_str(" completed");
        }
        if deleting.get() {
            class.push_str(" deleting");
        }
        class
    };

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                class="todo-check"
                checked=completed
                on:change=move |_| store_dispatch(&store, TodoAction::ToggleComplete { id })
            />

            <input
                type="text"
                class=move || if editable.get() { "todo-text editing" } else { "todo-text" }
                prop:value=move || msg.get()
                prop:readOnly=move || !editable.get()
                on:input=move |ev| set_msg.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => save_edit(),
                    "Escape" => cancel_edit(),
                    _ => {}
                }
            />

            <div class="todo-actions">
                <button
                    class="edit-btn"
                    disabled=completed
                    title=move || if editable.get() { "Save changes" } else { "Edit todo" }
                    on:click=move |_| {
                        if completed {
                            return;
                        }
                        if editable.get_untracked() {
                            save_edit();
                        } else {
                            set_editable.set(true);
                        }
                    }
                >
                    {move || if editable.get() { "✓" } else { "✎" }}
                </button>
                <button class="delete-btn" title="Delete todo" on:click=on_delete>"×"</button>
            </div>
        </div>
    }
}
