//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`, plus the load call the app
//! makes at startup and the dispatch it runs for each todo action.

use widget_core::config::{Settings, SETTINGS_KEY};
use widget_core::snapshot::{self, KeyValueStore, MemoryStore};
use widget_core::{Todo, TodoAction, TodoState, WidgetError, WidgetResult};

/// Handle on the page's local storage
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> WidgetResult<Self> {
        let window = web_sys::window().ok_or(WidgetError::StorageUnavailable)?;
        let inner = window
            .local_storage()
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))?
            .ok_or(WidgetError::StorageUnavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> WidgetResult<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> WidgetResult<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| WidgetError::Storage(format!("{:?}", e)))
    }
}

/// Read the saved todo list; anything unusable means an empty list
pub fn load_todos(key: &str) -> Vec<Todo> {
    match LocalStorage::open() {
        Ok(store) => snapshot::load(&store, key),
        Err(e) => {
            log::warn!("local storage unavailable, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Apply `action` and save the list if it changed. Without local storage the
/// change still applies but only lives for this page load.
pub fn dispatch_todos(state: &mut TodoState, key: &str, action: TodoAction) -> bool {
    match LocalStorage::open() {
        Ok(store) => snapshot::dispatch(state, &store, key, action),
        Err(e) => {
            log::warn!("local storage unavailable, change not saved: {}", e);
            snapshot::dispatch(state, &MemoryStore::new(), key, action)
        }
    }
}

/// Settings overrides from local storage. No override means the defaults.
pub fn load_settings() -> WidgetResult<Settings> {
    match LocalStorage::open()?.get(SETTINGS_KEY)? {
        Some(raw) => Settings::from_json(&raw),
        None => Ok(Settings::default()),
    }
}
