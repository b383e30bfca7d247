//! Per-row edit session.
//!
//! A row is either displayed or being edited. Editing ends on focus loss,
//! which either applies the draft or, when an abort was requested first,
//! discards it. The abort request is consumed by the first focus loss that
//! sees it, so a stale request can never suppress a later edit.

use crate::types::TodoId;

/// What ending an edit means for the list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Apply the draft (a blank draft removes the item)
    Commit {
        /// Edited item
        id: TodoId,
        /// Draft as typed
        title: String,
    },
    /// Return the row to display, leaving the item untouched
    Abort {
        /// Item whose edit was abandoned
        id: TodoId,
    },
    /// No edit was in progress
    Ignored,
}

/// Edit state owned by the input layer, separate from the items
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSession {
    editing_id: Option<TodoId>,
    pending_abort: bool,
    draft: String,
}

impl EditSession {
    /// A session with no row in editing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The row being edited, if any
    #[must_use]
    pub const fn editing_id(&self) -> Option<&TodoId> {
        self.editing_id.as_ref()
    }

    /// Current draft text; empty when not editing
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether an abort was requested and not yet consumed
    #[must_use]
    pub const fn abort_pending(&self) -> bool {
        self.pending_abort
    }

    /// Start editing `id`, seeding the draft with its current title
    ///
    /// A different row already in editing loses focus first; its outcome is
    /// returned. Beginning the row already in editing keeps its draft.
    pub fn begin(&mut self, id: TodoId, current_title: &str) -> EditOutcome {
        if self.editing_id.as_ref() == Some(&id) {
            return EditOutcome::Ignored;
        }
        let previous = self.focus_lost();
        tracing::debug!(%id, "Editing started");
        self.editing_id = Some(id);
        self.pending_abort = false;
        current_title.clone_into(&mut self.draft);
        previous
    }

    /// Replace the draft; ignored when not editing
    pub fn input(&mut self, text: &str) {
        if self.editing_id.is_some() {
            text.clone_into(&mut self.draft);
        }
    }

    /// Mark the current edit as abandoned; the next focus loss consumes it
    pub fn request_abort(&mut self) {
        if self.editing_id.is_some() {
            self.pending_abort = true;
        }
    }

    /// Commit key: leave the field, applying the draft
    pub fn commit_key(&mut self) -> EditOutcome {
        self.focus_lost()
    }

    /// Cancel key: request an abort, then leave the field
    pub fn cancel_key(&mut self) -> EditOutcome {
        self.request_abort();
        self.focus_lost()
    }

    /// The edit field lost focus
    pub fn focus_lost(&mut self) -> EditOutcome {
        let Some(id) = self.editing_id.take() else {
            return EditOutcome::Ignored;
        };
        let draft = std::mem::take(&mut self.draft);

        if std::mem::take(&mut self.pending_abort) {
            tracing::debug!(%id, "Edit aborted");
            EditOutcome::Abort { id }
        } else {
            EditOutcome::Commit { id, title: draft }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> TodoId {
        TodoId::new("milk")
    }

    #[test]
    fn test_begin_same_row_keeps_draft() {
        let mut session = EditSession::new();
        session.begin(milk(), "Buy milk");
        session.input("Buy bread");

        assert_eq!(session.begin(milk(), "Buy milk"), EditOutcome::Ignored);
        assert_eq!(session.draft(), "Buy bread");
        assert_eq!(session.editing_id(), Some(&milk()));
    }

    #[test]
    fn test_commit_applies_draft() {
        let mut session = EditSession::new();
        assert_eq!(session.begin(milk(), "Buy milk"), EditOutcome::Ignored);
        assert_eq!(session.draft(), "Buy milk");

        session.input("Buy oat milk");

        assert_eq!(
            session.commit_key(),
            EditOutcome::Commit {
                id: milk(),
                title: "Buy oat milk".into()
            }
        );
        assert_eq!(session.editing_id(), None);
    }

    #[test]
    fn test_cancel_with_empty_draft_aborts_once() {
        let mut session = EditSession::new();
        session.begin(milk(), "Buy milk");
        session.input("");

        assert_eq!(session.cancel_key(), EditOutcome::Abort { id: milk() });
        assert!(!session.abort_pending());
        // the trailing focus loss finds nothing to do
        assert_eq!(session.focus_lost(), EditOutcome::Ignored);
    }

    #[test]
    fn test_abort_flag_consumed_by_first_focus_loss() {
        let mut session = EditSession::new();
        session.begin(milk(), "Buy milk");
        session.request_abort();
        assert!(session.abort_pending());

        assert_eq!(session.focus_lost(), EditOutcome::Abort { id: milk() });

        session.begin(milk(), "Buy milk");
        session.input("Buy bread");
        assert_eq!(
            session.focus_lost(),
            EditOutcome::Commit {
                id: milk(),
                title: "Buy bread".into()
            }
        );
    }

    #[test]
    fn test_abort_outside_edit_is_ignored() {
        let mut session = EditSession::new();
        session.request_abort();
        assert!(!session.abort_pending());
        assert_eq!(session.cancel_key(), EditOutcome::Ignored);
    }

    #[test]
    fn test_begin_elsewhere_commits_previous_row() {
        let mut session = EditSession::new();
        session.begin(milk(), "Buy milk");
        session.input("Buy more milk");

        let previous = session.begin(TodoId::new("dog"), "Walk dog");

        assert_eq!(
            previous,
            EditOutcome::Commit {
                id: milk(),
                title: "Buy more milk".into()
            }
        );
        assert_eq!(session.editing_id(), Some(&TodoId::new("dog")));
        assert_eq!(session.draft(), "Walk dog");
    }
}
