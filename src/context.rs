//! Application Context
//!
//! Shared settings provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use widget_core::Settings;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    settings: StoredValue<Settings>,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: StoredValue::new(settings),
        }
    }

    pub fn generate_delay_ms(&self) -> u32 {
        self.settings.with_value(|s| s.generate_delay_ms)
    }

    pub fn add_delay_ms(&self) -> u32 {
        self.settings.with_value(|s| s.add_delay_ms)
    }

    pub fn delete_delay_ms(&self) -> u32 {
        self.settings.with_value(|s| s.delete_delay_ms)
    }

    pub fn copied_flash_ms(&self) -> i32 {
        self.settings.with_value(|s| s.copied_flash_timeout())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Cosmetic pause before applying an action; zero skips the timer
pub async fn simulate_work(ms: u32) {
    if ms > 0 {
        TimeoutFuture::new(ms).await;
    }
}
