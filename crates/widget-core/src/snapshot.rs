//! Todo Snapshot Persistence
//!
//! The whole list is stored as one JSON array under a single key, overwritten
//! after each mutation and read once at startup.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::WidgetResult;
use crate::todo::{dedupe_ids, Todo, TodoAction, TodoState};

/// Key the todo list lives under
pub const SNAPSHOT_KEY: &str = "todos";

/// Minimal string key-value store (browser local storage or in-memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> WidgetResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> WidgetResult<()>;
}

/// In-memory store, used for tests and as the fallback when the browser
/// exposes no local storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> WidgetResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> WidgetResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode(todos: &[Todo]) -> WidgetResult<String> {
    Ok(serde_json::to_string(todos)?)
}

pub fn decode(raw: &str) -> WidgetResult<Vec<Todo>> {
    Ok(serde_json::from_str(raw)?)
}

/// Restore the list stored under `key`.
///
/// A missing, unreadable, malformed or empty snapshot all mean "nothing
/// saved" and yield an empty list. Repeated ids keep their first record.
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<Todo> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("no snapshot under '{}'", key);
            return Vec::new();
        }
        Err(e) => {
            log::warn!("failed to read snapshot '{}': {}", key, e);
            return Vec::new();
        }
    };

    match decode(&raw) {
        Ok(todos) => {
            let todos = dedupe_ids(todos);
            log::info!("restored {} todos from '{}'", todos.len(), key);
            todos
        }
        Err(e) => {
            log::warn!("ignoring malformed snapshot '{}': {}", key, e);
            Vec::new()
        }
    }
}

/// Overwrite the snapshot under `key` with `todos`
pub fn save<S: KeyValueStore + ?Sized>(store: &S, key: &str, todos: &[Todo]) -> WidgetResult<()> {
    let raw = encode(todos)?;
    store.set(key, &raw)?;
    log::debug!("saved {} todos to '{}'", todos.len(), key);
    Ok(())
}

/// Apply `action` to `state`, then overwrite the snapshot if the list
/// changed. Filter changes are never written. A failed write is logged and
/// the in-memory change stands.
///
/// Returns whether the state changed.
pub fn dispatch<S: KeyValueStore + ?Sized>(
    state: &mut TodoState,
    store: &S,
    key: &str,
    action: TodoAction,
) -> bool {
    let touches_list = action.touches_list();
    if !state.apply(action) {
        return false;
    }
    if touches_list {
        if let Err(e) = save(store, key, &state.todos) {
            log::error!("failed to save todos: {}", e);
        }
    }
    true
}
