//! Widget Core
//!
//! Everything behind the two widgets that does not touch the DOM:
//! - password: alphabet assembly, generation and the strength meter
//! - todo: todo records, filter modes and the reducer
//! - snapshot: key-value persistence of the todo list
//! - config: runtime settings shared by the UI

pub mod config;
pub mod error;
pub mod password;
pub mod snapshot;
pub mod todo;

#[cfg(test)]
mod tests;

pub use config::Settings;
pub use error::{WidgetError, WidgetResult};
pub use password::{PasswordConfig, Strength, StrengthLevel};
pub use snapshot::{KeyValueStore, MemoryStore, SNAPSHOT_KEY};
pub use todo::{Clock, Filter, SystemClock, Todo, TodoAction, TodoCounts, TodoState};
