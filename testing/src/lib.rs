//! # Tasklist Testing
//!
//! Testing utilities and helpers for the tasklist architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits and runtime seams
//! - The [`ReducerTest`] Given-When-Then builder
//! - Property-based testing strategies
//! - Assertion helpers for reducer effects
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{RecordingRenderer, SequentialIdGenerator};
//! use tasklist_runtime::{storage::MemoryStorage, Store, StoreConfig};
//!
//! let renderer = RecordingRenderer::new();
//! let mut store = Store::new(
//!     TodoState::default(),
//!     TodoReducer::new(),
//!     TodoEnvironment::new(Arc::new(SequentialIdGenerator::new())),
//!     MemoryStorage::new(),
//!     StoreConfig::default(),
//! )
//! .with_renderer(renderer.clone());
//!
//! store.send(TodoAction::Add { title: "Buy milk".into() })?;
//! assert_eq!(renderer.count(), 1);
//! ```


pub use reducer_test::{assertions, ReducerTest};

/// Mock implementations for testing
pub mod mocks {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tasklist_core::environment::IdGenerator;
    use tasklist_runtime::render::{RenderError, Renderer};
    use tasklist_runtime::storage::{KeyValueStorage, StorageError};

    /// Predictable id generator: `id-1`, `id-2`, ...
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::SequentialIdGenerator;
    /// use tasklist_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), "id-1");
    /// assert_eq!(ids.next_id(), "id-2");
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator starting at `id-1`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                next: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
            format!("id-{n}")
        }
    }

    /// Renderer that records a clone of every state it is shown
    ///
    /// Clones share the recording, so keep one handle and move the other
    /// into the store.
    #[derive(Debug)]
    pub struct RecordingRenderer<S> {
        frames: Rc<RefCell<Vec<S>>>,
    }

    impl<S> RecordingRenderer<S> {
        /// Create a renderer with no recorded frames
        #[must_use]
        pub fn new() -> Self {
            Self {
                frames: Rc::new(RefCell::new(Vec::new())),
            }
        }

        /// Number of renders observed
        #[must_use]
        pub fn count(&self) -> usize {
            self.frames.borrow().len()
        }

        /// The most recently rendered state
        #[must_use]
        pub fn last(&self) -> Option<S>
        where
            S: Clone,
        {
            self.frames.borrow().last().cloned()
        }
    }

    impl<S> Clone for RecordingRenderer<S> {
        fn clone(&self) -> Self {
            Self {
                frames: Rc::clone(&self.frames),
            }
        }
    }

    impl<S> Default for RecordingRenderer<S> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<S: Clone> Renderer<S> for RecordingRenderer<S> {
        fn render(&mut self, state: &S) -> Result<(), RenderError> {
            self.frames.borrow_mut().push(state.clone());
            Ok(())
        }
    }

    /// Storage whose writes always fail; reads return nothing
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable(format!("quota exceeded writing '{key}'")))
        }
    }
}

/// Property-based testing utilities
pub mod properties {
    use proptest::prelude::*;

    /// Titles that survive trimming: at least one visible character,
    /// optionally padded with whitespace
    pub fn non_blank_title() -> impl Strategy<Value = String> {
        ("[ \t]{0,3}", "[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}", "[ \t]{0,3}")
            .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
    }

    /// Titles that trim to nothing
    pub fn blank_title() -> impl Strategy<Value = String> {
        "[ \t\n]{0,6}"
    }

    /// A title that is blank roughly one time in four
    pub fn any_title() -> impl Strategy<Value = String> {
        prop_oneof![3 => non_blank_title(), 1 => blank_title()]
    }
}

// Re-export commonly used items
pub use mocks::{FailingStorage, RecordingRenderer, SequentialIdGenerator};
