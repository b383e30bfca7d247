//! Stateless projection from [`TodoState`] to what the screen shows.
//!
//! Every call recomputes the whole projection. Painting it is left to a
//! [`crate::paint`] painter.

use crate::types::{Filter, TodoId, TodoState};
use serde::Serialize;

/// One visible row
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Item id
    pub id: TodoId,
    /// Item title
    pub title: String,
    /// Completed flag
    pub completed: bool,
}

/// A filter link in the footer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterLink {
    /// Filter the link selects
    pub filter: Filter,
    /// Route the link points at
    pub href: String,
    /// Whether this is the current filter
    pub selected: bool,
}

/// Footer summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterView {
    /// Items not yet completed
    pub active_count: usize,
    /// "item" or "items", agreeing with `active_count`
    pub active_word: String,
    /// Completed items
    pub completed_count: usize,
    /// Current filter
    pub filter: Filter,
    /// Filter links, the current one marked selected
    pub links: Vec<FilterLink>,
    /// Whether the "clear completed" control is offered
    pub show_clear_completed: bool,
    /// Whether the footer is shown at all
    pub visible: bool,
}

/// Where input focus goes after a render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Focus {
    /// The new-item entry field
    NewItem,
}

/// The full rendered list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListView {
    /// Rows selected by the current filter, in list order
    pub items: Vec<ItemView>,
    /// Whether the list container is shown (any item exists, regardless of filter)
    pub main_visible: bool,
    /// State of the "select all" control: checked iff nothing is active
    pub toggle_all_checked: bool,
    /// Footer summary
    pub footer: FooterView,
    /// Focus target
    pub focus: Focus,
}

/// `word` for exactly one, `word` + "s" otherwise
#[must_use]
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Project the whole list
#[must_use]
pub fn render(state: &TodoState) -> ListView {
    let items = state
        .filtered_items()
        .map(|t| ItemView {
            id: t.id.clone(),
            title: t.title.clone(),
            completed: t.completed,
        })
        .collect();

    ListView {
        items,
        main_visible: state.count() > 0,
        toggle_all_checked: state.active_count() == 0,
        footer: render_footer(state),
        focus: Focus::NewItem,
    }
}

/// Project the footer summary
#[must_use]
pub fn render_footer(state: &TodoState) -> FooterView {
    let total = state.count();
    let active_count = state.active_count();
    let completed_count = total - active_count;

    FooterView {
        active_count,
        active_word: pluralize(active_count, "item"),
        completed_count,
        filter: state.filter,
        links: Filter::ALL
            .into_iter()
            .map(|filter| FilterLink {
                filter,
                href: crate::router::href(filter),
                selected: filter == state.filter,
            })
            .collect(),
        show_clear_completed: completed_count > 0,
        visible: total > 0,
    }
}
