//! Reducer logic for the task list.
//!
//! Every action that changes the item list returns a persist followed by a
//! render. Filter changes and refreshes only render. Actions that change
//! nothing (blank titles, unknown ids) return no effects at all.

use crate::types::{Filter, TodoAction, TodoId, TodoItem, TodoState};
use std::sync::Arc;
use tasklist_core::{
    effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec, SmallVec,
};

type Effects = SmallVec<[Effect; 4]>;

/// Environment dependencies for the task list reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of fresh item ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

/// Reducer for the task list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn committed() -> Effects {
        smallvec![Effect::Persist, Effect::Render]
    }

    fn add(state: &mut TodoState, title: &str, env: &TodoEnvironment) -> Effects {
        let title = title.trim();
        if title.is_empty() {
            return SmallVec::new();
        }

        let id = TodoId::new(env.ids.next_id());
        tracing::debug!(%id, "Adding item");
        state.todos.push(TodoItem::new(id, title.to_string()));
        Self::committed()
    }

    fn toggle(state: &mut TodoState, id: &TodoId) -> Effects {
        let Some(todo) = state.todos.iter_mut().find(|t| &t.id == id) else {
            tracing::debug!(%id, "Toggle for unknown item ignored");
            return SmallVec::new();
        };
        todo.completed = !todo.completed;
        Self::committed()
    }

    fn edit_title(state: &mut TodoState, id: &TodoId, title: &str) -> Effects {
        let title = title.trim();
        if title.is_empty() {
            return Self::remove(state, id);
        }

        let Some(todo) = state.todos.iter_mut().find(|t| &t.id == id) else {
            tracing::debug!(%id, "Edit for unknown item ignored");
            return SmallVec::new();
        };
        title.clone_into(&mut todo.title);
        Self::committed()
    }

    fn remove(state: &mut TodoState, id: &TodoId) -> Effects {
        let Some(index) = state.position(id) else {
            tracing::debug!(%id, "Remove for unknown item ignored");
            return SmallVec::new();
        };
        state.todos.remove(index);
        Self::committed()
    }

    fn toggle_all(state: &mut TodoState, completed: bool) -> Effects {
        for todo in &mut state.todos {
            todo.completed = completed;
        }
        Self::committed()
    }

    fn clear_completed(state: &mut TodoState) -> Effects {
        let before = state.count();
        state.todos.retain(|t| !t.completed);
        state.filter = Filter::All;
        tracing::debug!(removed = before - state.count(), "Cleared completed items");
        Self::committed()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Effects {
        match action {
            TodoAction::Add { title } => Self::add(state, &title, env),
            TodoAction::Toggle { id } => Self::toggle(state, &id),
            TodoAction::EditTitle { id, title } => Self::edit_title(state, &id, &title),
            TodoAction::Remove { id } => Self::remove(state, &id),
            TodoAction::ToggleAll { completed } => Self::toggle_all(state, completed),
            TodoAction::ClearCompleted => Self::clear_completed(state),
            TodoAction::SetFilter { filter } => {
                state.filter = filter;
                smallvec![Effect::Render]
            },
            TodoAction::Refresh => smallvec![Effect::Render],
        }
    }
}
