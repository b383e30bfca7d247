//! Store-level properties of the task list, exercised through the runtime
//! `Store` exactly as the application drives it.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use tasklist::{Filter, TodoAction, TodoEnvironment, TodoReducer, TodoState, TodoStore};
use tasklist_runtime::storage::MemoryStorage;
use tasklist_runtime::{Store, StoreConfig};
use tasklist_testing::properties::any_title;
use tasklist_testing::{RecordingRenderer, SequentialIdGenerator};

fn test_store(storage: MemoryStorage) -> TodoStore {
    Store::new(
        TodoState::new(),
        TodoReducer::new(),
        TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())),
        storage,
        StoreConfig::new("todos"),
    )
}

fn add(store: &mut TodoStore, title: &str) {
    store
        .send(TodoAction::Add {
            title: title.to_string(),
        })
        .unwrap();
}

fn titles(store: &TodoStore) -> Vec<String> {
    store.state(|s| s.todos.iter().map(|t| t.title.clone()).collect())
}

proptest! {
    #[test]
    fn non_blank_adds_grow_the_list_with_unique_ids(titles in prop::collection::vec(any_title(), 0..40)) {
        let mut store = test_store(MemoryStorage::new());

        for title in &titles {
            add(&mut store, title);
        }

        let expected = titles.iter().filter(|t| !t.trim().is_empty()).count();
        let ids: HashSet<String> =
            store.state(|s| s.todos.iter().map(|t| t.id.to_string()).collect());
        prop_assert_eq!(store.state(TodoState::count), expected);
        prop_assert_eq!(ids.len(), expected);
        prop_assert!(store.state(|s| s.todos.iter().all(|t| t.title == t.title.trim() && !t.title.is_empty())));
    }
}

#[test]
fn test_blank_adds_change_nothing() {
    let storage = MemoryStorage::new();
    let mut store = test_store(storage.clone());

    add(&mut store, "");
    add(&mut store, "   ");

    assert_eq!(store.state(TodoState::count), 0);
    assert_eq!(storage.writes(), 0);
}

#[test]
fn test_toggle_all_empties_the_opposite_subset() {
    let mut store = test_store(MemoryStorage::new());
    for title in ["a", "b", "c"] {
        add(&mut store, title);
    }

    store.send(TodoAction::ToggleAll { completed: true }).unwrap();
    assert_eq!(store.state(|s| s.active_items().count()), 0);

    store.send(TodoAction::ToggleAll { completed: false }).unwrap();
    assert_eq!(store.state(|s| s.completed_items().count()), 0);
}

#[test]
fn test_clear_completed_removes_exactly_completed_in_order() {
    let mut store = test_store(MemoryStorage::new());
    for title in ["a", "b", "c", "d", "e"] {
        add(&mut store, title);
    }
    for n in [2, 5] {
        let id = store.state(|s| s.todos[n - 1].id.clone());
        store.send(TodoAction::Toggle { id }).unwrap();
    }
    store
        .send(TodoAction::SetFilter {
            filter: Filter::Active,
        })
        .unwrap();

    store.send(TodoAction::ClearCompleted).unwrap();

    assert_eq!(titles(&store), vec!["a", "c", "d"]);
    assert_eq!(store.state(|s| s.filter), Filter::All);
}

#[test]
fn test_edit_to_empty_equals_remove() {
    let mut edited = test_store(MemoryStorage::new());
    let mut removed = test_store(MemoryStorage::new());
    for store in [&mut edited, &mut removed] {
        for title in ["a", "b", "c"] {
            add(store, title);
        }
    }
    let id = edited.state(|s| s.todos[1].id.clone());

    edited
        .send(TodoAction::EditTitle {
            id: id.clone(),
            title: String::new(),
        })
        .unwrap();
    removed.send(TodoAction::Remove { id }).unwrap();

    assert_eq!(edited.state(Clone::clone), removed.state(Clone::clone));
    assert_eq!(titles(&edited), vec!["a", "c"]);
}

#[test]
fn test_filtered_items_preserve_order() {
    let mut store = test_store(MemoryStorage::new());
    for title in ["a", "b", "c", "d"] {
        add(&mut store, title);
    }
    for n in [1, 3] {
        let id = store.state(|s| s.todos[n - 1].id.clone());
        store.send(TodoAction::Toggle { id }).unwrap();
    }

    let visible = |store: &TodoStore| -> Vec<String> {
        store.state(|s| s.filtered_items().map(|t| t.title.clone()).collect())
    };

    store.send(TodoAction::SetFilter { filter: Filter::Active }).unwrap();
    assert_eq!(visible(&store), vec!["b", "d"]);
    assert!(store.state(|s| s.filtered_items().all(|t| !t.completed)));

    store
        .send(TodoAction::SetFilter {
            filter: Filter::Completed,
        })
        .unwrap();
    assert_eq!(visible(&store), vec!["a", "c"]);
    assert!(store.state(|s| s.filtered_items().all(|t| t.completed)));
}

#[test]
fn test_each_mutation_writes_and_renders_once() {
    let storage = MemoryStorage::new();
    let renderer = RecordingRenderer::new();
    let mut store = test_store(storage.clone()).with_renderer(renderer.clone());

    add(&mut store, "a");
    add(&mut store, "b");

    assert_eq!(storage.writes(), 2);
    assert_eq!(renderer.count(), 2);
    assert_eq!(renderer.last().map(|s: TodoState| s.count()), Some(2));

    store
        .send(TodoAction::SetFilter {
            filter: Filter::Completed,
        })
        .unwrap();

    assert_eq!(storage.writes(), 2, "filter changes are not persisted");
    assert_eq!(renderer.count(), 3);
}
