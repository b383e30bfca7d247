//! Editing rows through the input layer.

#![allow(clippy::unwrap_used)] // Tests can unwrap

use tasklist::{App, InputEvent, TodoId};
use tasklist_runtime::storage::MemoryStorage;
use tasklist_testing::RecordingRenderer;

fn app_with(titles: &[&str]) -> App {
    let mut app = App::open_with(MemoryStorage::new(), "todos").unwrap();
    for title in titles {
        app.handle(InputEvent::SubmitNew {
            text: (*title).to_string(),
        })
        .unwrap();
    }
    app
}

fn title_of(app: &App, id: &TodoId) -> Option<String> {
    app.store().state(|s| s.get(id).map(|t| t.title.clone()))
}

fn send_all(app: &mut App, events: impl IntoIterator<Item = InputEvent>) {
    for event in events {
        app.handle(event).unwrap();
    }
}

#[test]
fn test_cancel_then_blur_keeps_item_even_when_emptied() {
    let mut app = app_with(&["Buy milk"]);
    let id = app.visible_id(1).unwrap();

    send_all(
        &mut app,
        [
            InputEvent::BeginEdit { id: id.clone() },
            InputEvent::EditInput {
                text: String::new(),
            },
            InputEvent::AbortEdit,
            InputEvent::FocusLost,
        ],
    );

    assert_eq!(title_of(&app, &id).as_deref(), Some("Buy milk"));
    assert_eq!(app.store().state(|s| s.count()), 1);
    assert!(app.session().editing_id().is_none());
    assert!(!app.session().abort_pending());
}

#[test]
fn test_abort_rerenders_without_writing() {
    let storage = MemoryStorage::new();
    let mut app = App::open_with(storage.clone(), "todos").unwrap();
    app.handle(InputEvent::SubmitNew {
        text: "Buy milk".into(),
    })
    .unwrap();
    let renderer = RecordingRenderer::new();
    app.store_mut().add_renderer(renderer.clone());
    let id = app.visible_id(1).unwrap();

    send_all(
        &mut app,
        [
            InputEvent::BeginEdit { id },
            InputEvent::EditInput { text: "x".into() },
            InputEvent::AbortEdit,
        ],
    );

    assert_eq!(storage.writes(), 1);
    assert_eq!(renderer.count(), 1);
}

#[test]
fn test_commit_key_applies_trimmed_title() {
    let mut app = app_with(&["Buy milk"]);
    let id = app.visible_id(1).unwrap();

    send_all(
        &mut app,
        [
            InputEvent::BeginEdit { id: id.clone() },
            InputEvent::EditInput {
                text: "  Buy oat milk ".into(),
            },
            InputEvent::CommitEdit,
        ],
    );

    assert_eq!(title_of(&app, &id).as_deref(), Some("Buy oat milk"));
}

#[test]
fn test_blur_with_empty_draft_deletes() {
    let mut app = app_with(&["Buy milk", "Walk dog"]);
    let id = app.visible_id(1).unwrap();

    send_all(
        &mut app,
        [
            InputEvent::BeginEdit { id: id.clone() },
            InputEvent::EditInput { text: "   ".into() },
            InputEvent::FocusLost,
        ],
    );

    assert_eq!(title_of(&app, &id), None);
    assert_eq!(app.store().state(|s| s.count()), 1);
}

#[test]
fn test_abort_does_not_leak_into_next_edit() {
    let mut app = app_with(&["Buy milk"]);
    let id = app.visible_id(1).unwrap();

    send_all(
        &mut app,
        [
            InputEvent::BeginEdit { id: id.clone() },
            InputEvent::AbortEdit,
            InputEvent::BeginEdit { id: id.clone() },
            InputEvent::EditInput {
                text: "Buy bread".into(),
            },
            InputEvent::FocusLost,
        ],
    );

    assert_eq!(title_of(&app, &id).as_deref(), Some("Buy bread"));
}

#[test]
fn test_editing_a_deleted_row_is_harmless() {
    let mut app = app_with(&["Buy milk"]);
    let id = app.visible_id(1).unwrap();

    send_all(
        &mut app,
        [
            InputEvent::BeginEdit { id: id.clone() },
            InputEvent::DeleteOne { id },
            InputEvent::EditInput { text: "ghost".into() },
            InputEvent::CommitEdit,
        ],
    );

    assert_eq!(app.store().state(|s| s.count()), 0);
}

#[test]
fn test_begin_edit_on_row_in_editing_keeps_typed_text() {
    let mut app = app_with(&["Buy milk"]);
    let id = app.visible_id(1).unwrap();

    send_all(
        &mut app,
        [
            InputEvent::BeginEdit { id: id.clone() },
            InputEvent::EditInput {
                text: "Buy bread".into(),
            },
            InputEvent::BeginEdit { id: id.clone() },
        ],
    );
    assert_eq!(app.session().draft(), "Buy bread");

    app.handle(InputEvent::CommitEdit).unwrap();

    assert_eq!(title_of(&app, &id).as_deref(), Some("Buy bread"));
}
