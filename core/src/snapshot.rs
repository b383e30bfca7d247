//! Persisted snapshots of reducer state
//!
//! Only part of a store's state is durable. A [`Persisted`] state names that
//! part (its [`Persisted::Snapshot`]), knows how to extract it after every
//! mutation, and how to rebuild a fresh state from it at startup.
//!
//! # Example
//!
//! ```
//! use tasklist_core::snapshot::Persisted;
//!
//! #[derive(Default)]
//! struct Notes {
//!     lines: Vec<String>,
//!     cursor: usize, // view-only, not persisted
//! }
//!
//! impl Persisted for Notes {
//!     type Snapshot = Vec<String>;
//!
//!     fn snapshot(&self) -> Vec<String> {
//!         self.lines.clone()
//!     }
//!
//!     fn restore(lines: Vec<String>) -> Self {
//!         Self { lines, cursor: 0 }
//!     }
//! }
//!
//! let notes = Notes::restore(vec!["a".into()]);
//! assert_eq!(notes.snapshot(), vec!["a".to_string()]);
//! assert_eq!(notes.cursor, 0);
//! ```

use serde::{de::DeserializeOwned, Serialize};

/// State with a durable slice that is written after every mutation
pub trait Persisted: Default {
    /// The serialized form stored under the store's key
    type Snapshot: Serialize + DeserializeOwned;

    /// Extract the durable slice of the current state
    fn snapshot(&self) -> Self::Snapshot;

    /// Rebuild state from a previously written snapshot
    ///
    /// Everything not covered by the snapshot starts at its default.
    fn restore(snapshot: Self::Snapshot) -> Self;
}
