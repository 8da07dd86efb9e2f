//! Runtime Settings
//!
//! Knobs the UI reads at startup. Any field missing from an override falls
//! back to its default.

use serde::{Deserialize, Serialize};

use crate::error::WidgetResult;
use crate::password::PasswordConfig;
use crate::snapshot::SNAPSHOT_KEY;

/// Local storage key holding optional settings overrides
pub const SETTINGS_KEY: &str = "pocket-widgets.settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key the todo snapshot is stored under
    pub storage_key: String,
    /// Simulated work before a new password appears (0 = immediate)
    pub generate_delay_ms: u32,
    /// Simulated work before a todo is added
    pub add_delay_ms: u32,
    /// Time the delete animation gets before the todo is removed
    pub delete_delay_ms: u32,
    /// How long the "Copied!" indicator stays up
    pub copied_flash_ms: u32,
    /// Generator settings on first render
    pub default_password: PasswordConfig,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: SNAPSHOT_KEY.to_string(),
            generate_delay_ms: 200,
            add_delay_ms: 200,
            delete_delay_ms: 300,
            copied_flash_ms: 2000,
            default_password: PasswordConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> WidgetResult<Self> {
        let mut settings: Settings = serde_json::from_str(raw)?;
        // Keep an overridden default inside the slider range
        settings.default_password = settings
            .default_password
            .with_length(settings.default_password.length);
        Ok(settings)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// `copied_flash_ms` as a browser timeout, saturating at `i32::MAX`
    pub fn copied_flash_timeout(&self) -> i32 {
        i32::try_from(self.copied_flash_ms).unwrap_or(i32::MAX)
    }
}
