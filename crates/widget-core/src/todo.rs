//! Todo List State
//!
//! Todo records, filter modes and a reducer. Every transition is pure: the
//! caller decides when to persist the result.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single task, identified by its creation timestamp (ms)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    /// Older snapshots stored the text under `todo`
    #[serde(alias = "todo")]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// View selector over the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// (title, hint) shown when the filtered list is empty
    pub fn empty_message(&self) -> (&'static str, &'static str) {
        match self {
            Filter::All => ("No tasks yet", "Add your first task above to get started!"),
            Filter::Active => ("No active tasks", "All tasks are completed! 🎉"),
            Filter::Completed => ("No completed tasks", "Complete some tasks to see them here"),
        }
    }
}

/// Source of creation timestamps for new todos
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock: `Date.now()` in the browser, `SystemTime` elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Transitions accepted by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    Add { id: u64, text: String },
    Update { id: u64, text: String },
    Delete { id: u64 },
    ToggleComplete { id: u64 },
    ClearCompleted,
    SetFilter(Filter),
    /// Swap the whole list, e.g. after restoring a snapshot
    Replace(Vec<Todo>),
}

impl TodoAction {
    /// Build an `Add` stamped with the clock's current time
    pub fn add(text: impl Into<String>, clock: &impl Clock) -> Self {
        TodoAction::Add {
            id: clock.now_ms(),
            text: text.into(),
        }
    }

    /// Whether applying this action may change the persisted list
    pub fn touches_list(&self) -> bool {
        !matches!(self, TodoAction::SetFilter(_))
    }
}

/// Keep the first todo for each id, dropping later duplicates
pub fn dedupe_ids(todos: Vec<Todo>) -> Vec<Todo> {
    let mut seen = HashSet::with_capacity(todos.len());
    let before = todos.len();
    let unique: Vec<Todo> = todos.into_iter().filter(|t| seen.insert(t.id)).collect();
    if unique.len() != before {
        log::warn!("dropped {} todos with duplicate ids", before - unique.len());
    }
    unique
}

/// Totals for the filter badges and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Todo list plus the active filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoState {
    /// Newest first
    pub todos: Vec<Todo>,
    pub filter: Filter,
}

/// Apply `action` to `state`, returning the next state
pub fn reduce(mut state: TodoState, action: TodoAction) -> TodoState {
    state.apply(action);
    state
}

impl TodoState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            filter: Filter::All,
        }
    }

    /// Apply an action in place. Returns `true` if anything changed.
    pub fn apply(&mut self, action: TodoAction) -> bool {
        log::debug!("todo action: {:?}", action);
        match action {
            TodoAction::Add { id, text } => self.insert(id, &text),
            TodoAction::Update { id, text } => self.update(id, &text),
            TodoAction::Delete { id } => self.delete(id),
            TodoAction::ToggleComplete { id } => self.toggle_complete(id),
            TodoAction::ClearCompleted => self.clear_completed() > 0,
            TodoAction::SetFilter(filter) => {
                let changed = self.filter != filter;
                self.filter = filter;
                changed
            }
            TodoAction::Replace(todos) => {
                let todos = dedupe_ids(todos);
                let changed = self.todos != todos;
                self.todos = todos;
                changed
            }
        }
    }

    /// Prepend a todo stamped with the wall clock
    pub fn add(&mut self, text: &str) -> bool {
        self.insert(SystemClock.now_ms(), text)
    }

    /// Prepend a todo with the given id. Blank text is ignored; a clashing id
    /// is bumped past the current maximum, or to the lowest free id once the
    /// maximum is `u64::MAX`.
    pub fn insert(&mut self, id: u64, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let id = if self.contains(id) { self.next_free_id() } else { id };
        self.todos.insert(0, Todo::new(id, text));
        true
    }

    /// Replace the text of `id` in place. Blank text leaves the old text.
    pub fn update(&mut self, id: u64, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) if todo.text != text => {
                todo.text = text.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    pub fn toggle_complete(&mut self, id: u64) -> bool {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .map(|t| t.completed = !t.completed)
            .is_some()
    }

    /// Drop completed todos, keeping the rest in order. Returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        before - self.todos.len()
    }

    fn next_free_id(&self) -> u64 {
        self.todos
            .iter()
            .map(|t| t.id)
            .max()
            .and_then(|max| max.checked_add(1))
            .unwrap_or_else(|| (0..).find(|id| !self.contains(*id)).unwrap_or_default())
    }

    pub fn contains(&self, id: u64) -> bool {
        self.todos.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Todos visible under `mode`, in list order
    pub fn filtered_view(&self, mode: Filter) -> impl Iterator<Item = &Todo> + '_ {
        self.todos.iter().filter(move |t| mode.matches(t))
    }

    /// Todos visible under the current filter
    pub fn visible(&self) -> impl Iterator<Item = &Todo> + '_ {
        self.filtered_view(self.filter)
    }

    pub fn counts(&self) -> TodoCounts {
        let completed = self.todos.iter().filter(|t| t.completed).count();
        TodoCounts {
            total: self.todos.len(),
            active: self.todos.len() - completed,
            completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoState {
        TodoState::new(vec![
            Todo::new(3, "third"),
            Todo::new(2, "second"),
            Todo::new(1, "first"),
        ])
    }

    #[test]
    fn test_add_trims_and_prepends() {
        let mut state = sample();
        assert!(state.insert(10, "  buy milk  "));
        assert_eq!(state.todos[0], Todo::new(10, "buy milk"));
        assert_eq!(state.todos.len(), 4);
    }

    #[test]
    fn test_add_stamps_with_wall_clock() {
        let mut state = TodoState::default();
        assert!(state.add("  call mom "));
        assert_eq!(state.todos[0].text, "call mom");
        assert!(state.todos[0].id > 0);
        assert!(!state.todos[0].completed);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut state = sample();
        assert!(!state.insert(10, ""));
        assert!(!state.insert(11, "   \t"));
        assert_eq!(state, sample());
    }

    #[test]
    fn test_add_with_clashing_id() {
        let mut state = sample();
        assert!(state.insert(2, "dup"));
        assert_eq!(state.todos[0].id, 4);
    }

    #[test]
    fn test_update_keeps_position_and_completion() {
        let mut state = sample();
        state.toggle_complete(2);
        assert!(state.update(2, " renamed "));
        assert_eq!(state.todos[1].text, "renamed");
        assert!(state.todos[1].completed);
    }

    #[test]
    fn test_update_blank_or_missing_is_noop() {
        let mut state = sample();
        assert!(!state.update(2, "  "));
        assert!(!state.update(99, "nope"));
        assert_eq!(state, sample());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = sample();
        assert!(state.toggle_complete(1));
        assert!(state.get(1).unwrap().completed);
        assert!(state.toggle_complete(1));
        assert_eq!(state, sample());
        assert!(!state.toggle_complete(99));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut state = sample();
        assert!(state.delete(2));
        assert!(!state.delete(2));
        let ids: Vec<u64> = state.todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_filtered_view() {
        let mut state = sample();
        state.toggle_complete(3);

        let active: Vec<u64> = state.filtered_view(Filter::Active).map(|t| t.id).collect();
        let done: Vec<u64> = state.filtered_view(Filter::Completed).map(|t| t.id).collect();
        assert_eq!(active, vec![2, 1]);
        assert_eq!(done, vec![3]);
        assert_eq!(state.filtered_view(Filter::All).count(), 3);
    }

    #[test]
    fn test_counts() {
        let mut state = sample();
        state.toggle_complete(1);
        assert_eq!(
            state.counts(),
            TodoCounts {
                total: 3,
                active: 2,
                completed: 1
            }
        );
    }

    #[test]
    fn test_clashing_id_at_u64_max() {
        let mut state = TodoState::new(vec![Todo::new(u64::MAX, "last"), Todo::new(0, "first")]);
        assert!(state.insert(u64::MAX, "next"));
        assert_eq!(state.todos[0].id, 1);
        assert_eq!(state.todos.len(), 3);
    }

    #[test]
    fn test_replace_drops_duplicate_ids() {
        let mut first = Todo::new(7, "keep");
        first.completed = true;
        let mut state = TodoState::default();
        assert!(state.apply(TodoAction::Replace(vec![
            first.clone(),
            Todo::new(8, "other"),
            Todo::new(7, "duplicate"),
        ])));

        assert_eq!(state.todos, vec![first, Todo::new(8, "other")]);
        // Deleting one id removes exactly one record
        assert!(state.delete(7));
        assert_eq!(state.todos.len(), 1);
    }

    #[test]
    fn test_set_filter_does_not_touch_list() {
        let action = TodoAction::SetFilter(Filter::Completed);
        assert!(!action.touches_list());
        let state = reduce(sample(), action);
        assert_eq!(state.filter, Filter::Completed);
        assert_eq!(state.todos, sample().todos);
    }
}
