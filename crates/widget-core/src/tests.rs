//! Scenario Tests
//!
//! Walks the todo reducer and the snapshot store together the way the UI
//! drives them: apply an action, save if it changed the list, reload later.

use std::cell::Cell;

use crate::snapshot::{self, KeyValueStore, MemoryStore, SNAPSHOT_KEY};
use crate::todo::{reduce, Clock, Filter, TodoAction, TodoState};

/// Clock that advances one millisecond per reading
struct FixedClock {
    next: Cell<u64>,
}

impl FixedClock {
    fn starting_at(ms: u64) -> Self {
        Self { next: Cell::new(ms) }
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        let now = self.next.get();
        self.next.set(now + 1);
        now
    }
}

fn dispatch(state: &mut TodoState, store: &MemoryStore, action: TodoAction) {
    snapshot::dispatch(state, store, SNAPSHOT_KEY, action);
}

#[test]
fn test_session_survives_reload() {
    let clock = FixedClock::starting_at(1_000);
    let store = MemoryStore::new();
    let mut state = TodoState::new(snapshot::load(&store, SNAPSHOT_KEY));
    assert!(state.todos.is_empty());

    dispatch(&mut state, &store, TodoAction::add("write report", &clock));
    dispatch(&mut state, &store, TodoAction::add("  buy milk  ", &clock));
    dispatch(&mut state, &store, TodoAction::ToggleComplete { id: 1_000 });

    let restored = TodoState::new(snapshot::load(&store, SNAPSHOT_KEY));
    assert_eq!(restored.todos, state.todos);
    assert_eq!(restored.todos[0].text, "buy milk");
    assert!(restored.todos[1].completed);
}

#[test]
fn test_blank_add_writes_nothing() {
    let clock = FixedClock::starting_at(1);
    let store = MemoryStore::new();
    let mut state = TodoState::default();

    dispatch(&mut state, &store, TodoAction::add("", &clock));
    assert!(state.todos.is_empty());
    assert_eq!(store.get(SNAPSHOT_KEY).unwrap(), None);
}

#[test]
fn test_complete_all_then_clear() {
    let clock = FixedClock::starting_at(10);
    let store = MemoryStore::new();
    let mut state = TodoState::default();
    for text in ["a", "b", "c", "d"] {
        dispatch(&mut state, &store, TodoAction::add(text, &clock));
    }
    // List is d, c, b, a
    let ids: Vec<u64> = state.todos.iter().map(|t| t.id).collect();
    for id in &ids {
        dispatch(&mut state, &store, TodoAction::ToggleComplete { id: *id });
    }
    assert_eq!(state.filtered_view(Filter::Active).count(), 0);

    // Reopen c and a, then clear the rest
    dispatch(&mut state, &store, TodoAction::ToggleComplete { id: ids[1] });
    dispatch(&mut state, &store, TodoAction::ToggleComplete { id: ids[3] });
    dispatch(&mut state, &store, TodoAction::ClearCompleted);

    let texts: Vec<&str> = state.todos.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["c", "a"]);
    assert_eq!(snapshot::load(&store, SNAPSHOT_KEY), state.todos);
}

#[test]
fn test_reducer_is_pure() {
    let before = TodoState::default();
    let after = reduce(
        before.clone(),
        TodoAction::Add {
            id: 1,
            text: "x".to_string(),
        },
    );
    assert!(before.todos.is_empty());
    assert_eq!(after.todos.len(), 1);
}

#[test]
fn test_replace_restores_list() {
    let store = MemoryStore::new();
    store
        .set(SNAPSHOT_KEY, r#"[{"id":2,"text":"b","completed":false},{"id":1,"text":"a","completed":true}]"#)
        .unwrap();

    let state = reduce(
        TodoState::default(),
        TodoAction::Replace(snapshot::load(&store, SNAPSHOT_KEY)),
    );
    assert_eq!(state.counts().completed, 1);
    let visible: Vec<u64> = reduce(state, TodoAction::SetFilter(Filter::Active))
        .visible()
        .map(|t| t.id)
        .collect();
    assert_eq!(visible, vec![2]);
}
