//! Todo Form Component
//!
//! Input for adding a todo to the top of the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use widget_core::{SystemClock, TodoAction};

use crate::context::{simulate_work, use_app_context};
use crate::store::{store_dispatch, use_app_store};

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let (adding, set_adding) = signal(false);

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() || adding.get_untracked() {
            return;
        }
        set_adding.set(true);

        spawn_local(async move {
            simulate_work(ctx.add_delay_ms()).await;
            store_dispatch(&store, TodoAction::add(text, &SystemClock));
            set_new_text.set(String::new());
            set_adding.set(false);
        });
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="What needs to be done? ✨"
                prop:value=move || new_text.get()
                disabled=move || adding.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || adding.get()>
                {move || if adding.get() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
