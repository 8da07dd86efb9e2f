//! Password Generator Component
//!
//! Length slider, character-class toggles, copy button and strength meter.
//! A new password is generated whenever the settings change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_clipboard::{copy_and_flash, create_copied_flag};
use widget_core::password::{self, PasswordConfig, MAX_LENGTH, MIN_LENGTH};

use crate::components::{StrengthMeter, ToggleSwitch};
use crate::context::{simulate_work, use_app_context};

#[component]
pub fn PasswordGenerator(initial: PasswordConfig) -> impl IntoView {
    let ctx = use_app_context();

    let (config, set_config) = signal(initial);
    let (password, set_password) = signal(String::new());
    let (generating, set_generating) = signal(false);
    // Only the newest request may publish its result
    let (request_id, set_request_id) = signal(0u32);
    let copied = create_copied_flag();

    let regenerate = move || {
        set_request_id.update(|n| *n = n.wrapping_add(1));
        let request = request_id.get_untracked();
        let snapshot = config.get_untracked();
        set_generating.set(true);

        spawn_local(async move {
            simulate_work(ctx.generate_delay_ms()).await;
            if request_id.get_untracked() != request {
                return;
            }
            let fresh = password::generate_with_thread_rng(&snapshot);
            log::debug!("generated password of length {}", fresh.len());
            set_password.set(fresh);
            set_generating.set(false);
        });
    };

    // Regenerate when settings change (and once on mount)
    Effect::new(move |_| {
        let _ = config.get();
        regenerate();
    });

    let on_copy = move |_| {
        let current = password.get_untracked();
        if current.is_empty() || generating.get_untracked() {
            return;
        }
        spawn_local(async move {
            match copy_and_flash(&current, copied, ctx.copied_flash_ms()).await {
                Ok(method) => log::debug!("password copied via {:?}", method),
                Err(e) => log::warn!("copy failed: {}", e),
            }
        });
    };

    view! {
        <section class="widget password-generator">
            <header class="widget-header">
                <h2>"Password Generator"</h2>
                <p class="widget-subtitle">"Create ultra-secure passwords instantly"</p>
            </header>

            <div class="password-display">
                <input
                    type="text"
                    readonly=true
                    class=move || if generating.get() { "password-output pulsing" } else { "password-output" }
                    placeholder="Your secure password will appear here"
                    prop:value=move || if generating.get() { "Generating...".to_string() } else { password.get() }
                />
                <button
                    class=move || if copied.get() { "copy-btn copied" } else { "copy-btn" }
                    disabled=move || password.get().is_empty() || generating.get()
                    on:click=on_copy
                >
                    {move || if copied.get() { "Copied!" } else { "Copy" }}
                </button>
            </div>

            <div class="length-row">
                <span class="length-label">"Length"</span>
                <span class="length-value">{move || config.get().length}</span>
            </div>
            <input
                type="range"
                class="length-slider"
                min=MIN_LENGTH.to_string()
                max=MAX_LENGTH.to_string()
                prop:value=move || config.get().length.to_string()
                on:input=move |ev| {
                    if let Ok(length) = event_target_value(&ev).parse::<usize>() {
                        set_config.update(|c| *c = c.with_length(length));
                    }
                }
            />

            <div class="toggles">
                <ToggleSwitch
                    label="Include Numbers"
                    checked=Signal::derive(move || config.get().include_digits)
                    on_toggle=move |_| set_config.update(|c| *c = c.toggle_digits())
                />
                <ToggleSwitch
                    label="Include Symbols"
                    checked=Signal::derive(move || config.get().include_symbols)
                    on_toggle=move |_| set_config.update(|c| *c = c.toggle_symbols())
                />
            </div>

            <button
                class="generate-btn"
                disabled=move || generating.get()
                on:click=move |_| regenerate()
            >
                {move || if generating.get() { "Generating..." } else { "Generate New Password" }}
            </button>

            <Show when=move || !password.get().is_empty()>
                <StrengthMeter config=config />
            </Show>
        </section>
    }
}
