//! Filter Tabs Component
//!
//! Tab bar for switching between all, active and completed todos.

use leptos::prelude::*;
use widget_core::{Filter, TodoAction};

use crate::store::{store_counts, store_dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterTabs() -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| store_counts(&store));

    view! {
        <Show when=move || { counts.get().total > 0 }>
            <div class="filter-tabs">
                {Filter::ALL.iter().map(|filter| {
                    let filter = *filter;
                    let is_active = move || store.filter().get() == filter;
                    let count = move || {
                        let c = counts.get();
                        match filter {
                            Filter::All => c.total,
                            Filter::Active => c.active,
                            Filter::Completed => c.completed,
                        }
                    };
                    view! {
                        <button
                            class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                            on:click=move |_| store_dispatch(&store, TodoAction::SetFilter(filter))
                        >
                            {filter.label()}
                            <Show when=move || { count() > 0 }>
                                <span class="filter-count">{count}</span>
                            </Show>
                        </button>
                    }
                }).collect_view()}
            </div>
        </Show>
    }
}
