//! Strength Meter Component

use leptos::prelude::*;
use widget_core::password::{self, PasswordConfig};

/// Bar and label rating the generator settings
#[component]
pub fn StrengthMeter(config: ReadSignal<PasswordConfig>) -> impl IntoView {
    let strength = Memo::new(move |_| password::strength(&config.get()));

    view! {
        <div class="strength-meter">
            <div class="strength-header">
                <span>"Password Strength"</span>
                <span class=move || format!("strength-label {}", strength.get().level.css_class())>
                    {move || strength.get().label()}
                </span>
            </div>
            <div class="strength-track">
                <div
                    class=move || format!("strength-fill {}", strength.get().level.css_class())
                    style=move || format!("width: {}%;", strength.get().percent())
                ></div>
            </div>
        </div>
    }
}
