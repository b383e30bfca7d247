//! Domain types for the task list.
//!
//! A task list is an ordered collection of items plus the filter currently
//! applied for display. Only the items are persisted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tasklist_core::snapshot::Persisted;

/// Opaque unique identifier for an item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wrap an identifier produced by an id generator or read from storage
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Whether the task is done
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed item
    #[must_use]
    pub const fn new(id: TodoId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }
}

/// Subset of items handed to the view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every item
    #[default]
    All,
    /// Items not yet completed
    Active,
    /// Completed items
    Completed,
}

impl Filter {
    /// Every filter, in footer order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// The route token for this filter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether `item` belongs to this subset
    #[must_use]
    pub const fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a token that names no filter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}'")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// State of the task list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoState {
    /// Items in insertion order
    pub todos: Vec<TodoItem>,
    /// Current display filter (not persisted)
    pub filter: Filter,
}

impl TodoState {
    /// Creates an empty state showing every item
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns an item by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| &t.id == id)
    }

    /// Checks if an item exists
    #[must_use]
    pub fn exists(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Position of an item in the list
    #[must_use]
    pub fn position(&self, id: &TodoId) -> Option<usize> {
        self.todos.iter().position(|t| &t.id == id)
    }

    /// Items not yet completed, in list order
    pub fn active_items(&self) -> impl Iterator<Item = &TodoItem> {
        self.items_matching(Filter::Active)
    }

    /// Completed items, in list order
    pub fn completed_items(&self) -> impl Iterator<Item = &TodoItem> {
        self.items_matching(Filter::Completed)
    }

    /// Items selected by the current filter, in list order
    pub fn filtered_items(&self) -> impl Iterator<Item = &TodoItem> {
        self.items_matching(self.filter)
    }

    /// Number of items not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_items().count()
    }

    /// Number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_items().count()
    }

    fn items_matching(&self, filter: Filter) -> impl Iterator<Item = &TodoItem> {
        self.todos.iter().filter(move |t| filter.matches(t))
    }
}

impl Persisted for TodoState {
    type Snapshot = Vec<TodoItem>;

    fn snapshot(&self) -> Vec<TodoItem> {
        self.todos.clone()
    }

    /// Items whose id repeats an earlier one, or whose title is blank once
    /// trimmed, are dropped. Surviving titles are stored trimmed.
    fn restore(snapshot: Vec<TodoItem>) -> Self {
        let stored = snapshot.len();
        let mut seen = HashSet::with_capacity(stored);
        let todos: Vec<TodoItem> = snapshot
            .into_iter()
            .filter_map(|mut todo| {
                let title = todo.title.trim().to_string();
                if title.is_empty() || !seen.insert(todo.id.clone()) {
                    return None;
                }
                todo.title = title;
                Some(todo)
            })
            .collect();

        if todos.len() != stored {
            tracing::warn!(
                stored,
                kept = todos.len(),
                "Dropped snapshot items with duplicate ids or blank titles"
            );
        }

        Self {
            todos,
            filter: Filter::All,
        }
    }
}

/// Actions the task list reducer understands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new item; blank titles are ignored
    Add {
        /// Raw title as typed
        title: String,
    },

    /// Flip the completed flag of one item
    Toggle {
        /// Item to toggle
        id: TodoId,
    },

    /// Replace an item's title; a blank title removes the item
    EditTitle {
        /// Item to edit
        id: TodoId,
        /// Raw title as typed
        title: String,
    },

    /// Delete one item
    Remove {
        /// Item to delete
        id: TodoId,
    },

    /// Set the completed flag of every item
    ToggleAll {
        /// Value to set
        completed: bool,
    },

    /// Delete every completed item and show all items again
    ClearCompleted,

    /// Change the display filter
    SetFilter {
        /// New filter
        filter: Filter,
    },

    /// Re-render without changing anything
    Refresh,
}
