//! Pocket Widgets Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use widget_core::Settings;

fn main() {
    console_error_panic_hook::set_once();

    let (settings, override_error) = match storage::load_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    console_logger::init(settings.log_level());
    if let Some(e) = override_error {
        log::warn!("ignoring settings override: {}", e);
    }
    log::info!("starting pocket widgets");

    mount_to_body(move || view! { <App settings=settings /> });
}
