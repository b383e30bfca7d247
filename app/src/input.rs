//! User input surface.
//!
//! Every input event is routed through [`DISPATCH_TABLE`], which maps the
//! event kind to a handler. Handlers translate the event, together with the
//! edit session and a read-only view of the state, into reducer actions.

use crate::edit::{EditOutcome, EditSession};
use crate::router;
use crate::types::{TodoAction, TodoId, TodoState};

/// Events raised by the host (keyboard, pointer, navigation)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The new-item field was submitted
    SubmitNew {
        /// Field contents
        text: String,
    },
    /// A row's checkbox changed
    ToggleOne {
        /// Row id
        id: TodoId,
    },
    /// The "select all" control changed
    ToggleAll {
        /// New checkbox state
        checked: bool,
    },
    /// A row's label was double-activated
    BeginEdit {
        /// Row id
        id: TodoId,
    },
    /// The edit field's contents changed
    EditInput {
        /// Field contents
        text: String,
    },
    /// Commit key pressed in the edit field
    CommitEdit,
    /// Cancel key pressed in the edit field
    AbortEdit,
    /// The edit field lost focus
    FocusLost,
    /// A row's delete control was activated
    DeleteOne {
        /// Row id
        id: TodoId,
    },
    /// The "clear completed" control was activated
    ClearCompleted,
    /// Navigation changed
    ChangeFilter {
        /// New route, e.g. `#/active`
        route: String,
    },
}

/// Discriminant of [`InputEvent`], the key of the dispatch table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// [`InputEvent::SubmitNew`]
    SubmitNew,
    /// [`InputEvent::ToggleOne`]
    ToggleOne,
    /// [`InputEvent::ToggleAll`]
    ToggleAll,
    /// [`InputEvent::BeginEdit`]
    BeginEdit,
    /// [`InputEvent::EditInput`]
    EditInput,
    /// [`InputEvent::CommitEdit`]
    CommitEdit,
    /// [`InputEvent::AbortEdit`]
    AbortEdit,
    /// [`InputEvent::FocusLost`]
    FocusLost,
    /// [`InputEvent::DeleteOne`]
    DeleteOne,
    /// [`InputEvent::ClearCompleted`]
    ClearCompleted,
    /// [`InputEvent::ChangeFilter`]
    ChangeFilter,
}

impl InputEvent {
    /// The kind used to look up this event's handler
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        match self {
            Self::SubmitNew { .. } => InputKind::SubmitNew,
            Self::ToggleOne { .. } => InputKind::ToggleOne,
            Self::ToggleAll { .. } => InputKind::ToggleAll,
            Self::BeginEdit { .. } => InputKind::BeginEdit,
            Self::EditInput { .. } => InputKind::EditInput,
            Self::CommitEdit => InputKind::CommitEdit,
            Self::AbortEdit => InputKind::AbortEdit,
            Self::FocusLost => InputKind::FocusLost,
            Self::DeleteOne { .. } => InputKind::DeleteOne,
            Self::ClearCompleted => InputKind::ClearCompleted,
            Self::ChangeFilter { .. } => InputKind::ChangeFilter,
        }
    }
}

/// Translates one event into the actions to send, in order
pub type Handler = fn(&mut EditSession, &TodoState, InputEvent) -> Vec<TodoAction>;

/// Event kind → handler
pub const DISPATCH_TABLE: &[(InputKind, Handler)] = &[
    (InputKind::SubmitNew, submit_new),
    (InputKind::ToggleOne, toggle_one),
    (InputKind::ToggleAll, toggle_all),
    (InputKind::BeginEdit, begin_edit),
    (InputKind::EditInput, edit_input),
    (InputKind::CommitEdit, commit_edit),
    (InputKind::AbortEdit, abort_edit),
    (InputKind::FocusLost, focus_lost),
    (InputKind::DeleteOne, delete_one),
    (InputKind::ClearCompleted, clear_completed),
    (InputKind::ChangeFilter, change_filter),
];

/// Look up the handler for `kind`
#[must_use]
pub fn handler_for(kind: InputKind) -> Option<Handler> {
    DISPATCH_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, handler)| *handler)
}

/// Route `event` through the dispatch table
#[must_use]
pub fn dispatch(session: &mut EditSession, state: &TodoState, event: InputEvent) -> Vec<TodoAction> {
    let kind = event.kind();
    match handler_for(kind) {
        Some(handler) => handler(session, state, event),
        None => {
            tracing::warn!(?kind, "No handler registered for input");
            Vec::new()
        },
    }
}

fn outcome_actions(outcome: EditOutcome) -> Vec<TodoAction> {
    match outcome {
        EditOutcome::Commit { id, title } => vec![TodoAction::EditTitle { id, title }],
        EditOutcome::Abort { .. } => vec![TodoAction::Refresh],
        EditOutcome::Ignored => Vec::new(),
    }
}

fn submit_new(_: &mut EditSession, _: &TodoState, event: InputEvent) -> Vec<TodoAction> {
    match event {
        InputEvent::SubmitNew { text } => vec![TodoAction::Add { title: text }],
        _ => Vec::new(),
    }
}

fn toggle_one(_: &mut EditSession, _: &TodoState, event: InputEvent) -> Vec<TodoAction> {
    match event {
        InputEvent::ToggleOne { id } => vec![TodoAction::Toggle { id }],
        _ => Vec::new(),
    }
}

fn toggle_all(_: &mut EditSession, _: &TodoState, event: InputEvent) -> Vec<TodoAction> {
    match event {
        InputEvent::ToggleAll { checked } => vec![TodoAction::ToggleAll { completed: checked }],
        _ => Vec::new(),
    }
}

fn begin_edit(session: &mut EditSession, state: &TodoState, event: InputEvent) -> Vec<TodoAction> {
    let InputEvent::BeginEdit { id } = event else {
        return Vec::new();
    };
    let Some(todo) = state.get(&id) else {
        tracing::debug!(%id, "Edit requested for unknown item");
        return Vec::new();
    };
    outcome_actions(session.begin(id, &todo.title))
}

fn edit_input(session: &mut EditSession, _: &TodoState, event: InputEvent) -> Vec<TodoAction> {
    if let InputEvent::EditInput { text } = event {
        session.input(&text);
    }
    Vec::new()
}

fn commit_edit(session: &mut EditSession, _: &TodoState, _: InputEvent) -> Vec<TodoAction> {
    outcome_actions(session.commit_key())
}

fn abort_edit(session: &mut EditSession, _: &TodoState, _: InputEvent) -> Vec<TodoAction> {
    outcome_actions(session.cancel_key())
}

fn focus_lost(session: &mut EditSession, _: &TodoState, _: InputEvent) -> Vec<TodoAction> {
    outcome_actions(session.focus_lost())
}

fn delete_one(_: &mut EditSession, _: &TodoState, event: InputEvent) -> Vec<TodoAction> {
    match event {
        InputEvent::DeleteOne { id } => vec![TodoAction::Remove { id }],
        _ => Vec::new(),
    }
}

fn clear_completed(_: &mut EditSession, _: &TodoState, _: InputEvent) -> Vec<TodoAction> {
    vec![TodoAction::ClearCompleted]
}

fn change_filter(_: &mut EditSession, _: &TodoState, event: InputEvent) -> Vec<TodoAction> {
    let InputEvent::ChangeFilter { route } = event else {
        return Vec::new();
    };
    match router::parse(&route) {
        Some(filter) => vec![TodoAction::SetFilter { filter }],
        None => {
            tracing::warn!(%route, "Ignoring unknown route");
            Vec::new()
        },
    }
}
