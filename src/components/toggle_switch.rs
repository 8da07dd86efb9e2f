//! Toggle Switch Component
//!
//! Labelled on/off switch used for the character-class options.

use leptos::prelude::*;

#[component]
pub fn ToggleSwitch(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <span class="toggle-label">{label}</span>
            <input
                type="checkbox"
                class="toggle-input"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
            <span class=move || if checked.get() { "toggle-track on" } else { "toggle-track" }>
                <span class="toggle-thumb"></span>
            </span>
        </label>
    }
}
