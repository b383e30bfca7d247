//! # Tasklist Runtime
//!
//! Runtime implementation for the tasklist architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution,
//! persistence and rendering.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer and executes effects in order
//! - **Storage**: Durable key-value backends the store persists snapshots into
//! - **Renderer**: Observers notified after every render effect
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::{storage::MemoryStorage, Store, StoreConfig};
//!
//! let mut store = Store::open(
//!     my_reducer,
//!     environment,
//!     MemoryStorage::new(),
//!     StoreConfig::new("todos"),
//! )?;
//!
//! // Send an action: reducer, then persistence write, then render
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use tasklist_core::{effect::Effect, reducer::Reducer, snapshot::Persisted};

/// Metric names and descriptions
pub mod metrics;

/// Renderer trait notified on every render effect
pub mod render;

/// Durable key-value storage backends
pub mod storage;

/// Error types for the Store runtime
pub mod error {
    use crate::render::RenderError;
    use crate::storage::StorageError;
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// None of these are produced by ordinary user input: blank titles and
    /// unknown ids are handled by reducers as no-ops. A failure here means the
    /// environment broke and the caller must decide what to do.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Reading or writing durable storage failed
        #[error("Storage operation failed: {0}")]
        Storage(#[from] StorageError),

        /// The persisted snapshot could not be encoded
        #[error("Snapshot serialization failed: {0}")]
        Serialization(#[from] serde_json::Error),

        /// A renderer reported a failure
        #[error("Render failed: {0}")]
        Render(#[source] RenderError),
    }
}

pub use error::StoreError;
pub use render::Renderer;
pub use storage::KeyValueStorage;
pub use store::Store;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use tasklist_runtime::StoreConfig;
///
/// let config = StoreConfig::new("tasks");
/// assert_eq!(config.storage_key, "tasks");
/// assert_eq!(StoreConfig::default().storage_key, "todos");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Key the persisted snapshot lives under
    pub storage_key: String,
}

impl StoreConfig {
    /// Create a configuration persisting under `storage_key`
    #[must_use]
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("todos")
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{Effect, Persisted, Reducer, StoreConfig, StoreError};
    use crate::metrics::{ACTIONS_TOTAL, PERSIST_FAILURES_TOTAL, PERSIST_WRITES_TOTAL, RENDERS_TOTAL};
    use crate::render::Renderer;
    use crate::storage::KeyValueStorage;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned directly; there is exactly one writer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution: persistence writes, then renders
    ///
    /// Every effect returned for an action runs before [`Store::send`]
    /// returns, so callers observe each action atomically.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        storage: Box<dyn KeyValueStorage>,
        renderers: Vec<Box<dyn Renderer<S>>>,
        config: StoreConfig,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Persisted,
        A: std::fmt::Debug,
    {
        /// Create a store from an explicit initial state
        ///
        /// Storage is not read; it is only written by later persist effects.
        #[must_use]
        pub fn new(
            initial_state: S,
            reducer: R,
            environment: E,
            storage: impl KeyValueStorage + 'static,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                storage: Box::new(storage),
                renderers: Vec::new(),
                config,
            }
        }

        /// Create a store seeded from the snapshot under `config.storage_key`
        ///
        /// This is the only read of storage during the store's lifetime. An
        /// absent value yields the default state. A value that does not parse
        /// as a snapshot is logged and also yields the default state.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Storage`] if the backend itself fails to read.
        pub fn open(
            reducer: R,
            environment: E,
            storage: impl KeyValueStorage + 'static,
            config: StoreConfig,
        ) -> Result<Self, StoreError> {
            let state = match storage.get(&config.storage_key)? {
                None => {
                    tracing::debug!(key = %config.storage_key, "No snapshot found, starting empty");
                    S::default()
                },
                Some(raw) => match serde_json::from_str::<S::Snapshot>(&raw) {
                    Ok(snapshot) => S::restore(snapshot),
                    Err(error) => {
                        tracing::warn!(
                            key = %config.storage_key,
                            error = %error,
                            "Ignoring unreadable snapshot"
                        );
                        S::default()
                    },
                },
            };

            Ok(Self::new(state, reducer, environment, storage, config))
        }

        /// Register a renderer notified on every render effect
        #[must_use]
        pub fn with_renderer(mut self, renderer: impl Renderer<S> + 'static) -> Self {
            self.add_renderer(renderer);
            self
        }

        /// Register a renderer notified on every render effect
        pub fn add_renderer(&mut self, renderer: impl Renderer<S> + 'static) {
            self.renderers.push(Box::new(renderer));
        }

        /// Send an action to the store
        ///
        /// 1. Calls the reducer with (state, action, environment)
        /// 2. Executes the returned effects in order
        ///
        /// # Errors
        ///
        /// Returns the first effect failure. State changes made by the reducer
        /// are kept; the remaining effects of that action are not run.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            tracing::debug!(?action, "Reducing action");
            metrics::counter!(ACTIONS_TOTAL).increment(1);

            let effects = self
                .reducer
                .reduce(&mut self.state, action, &self.environment);

            for effect in effects {
                match effect {
                    Effect::Persist => self.persist()?,
                    Effect::Render => self.render()?,
                }
            }

            Ok(())
        }

        /// Notify every renderer with the current state
        ///
        /// Called by render effects, and directly by hosts that need an
        /// initial paint before the first action.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::Render`] from the first failing renderer.
        pub fn render(&mut self) -> Result<(), StoreError> {
            metrics::counter!(RENDERS_TOTAL).increment(1);
            for renderer in &mut self.renderers {
                renderer.render(&self.state).map_err(StoreError::Render)?;
            }
            Ok(())
        }

        /// Read from the current state
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// The injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        /// The configured storage key
        #[must_use]
        pub fn storage_key(&self) -> &str {
            &self.config.storage_key
        }

        fn persist(&mut self) -> Result<(), StoreError> {
            let encoded = serde_json::to_string(&self.state.snapshot())?;
            if let Err(error) = self.storage.set(&self.config.storage_key, &encoded) {
                metrics::counter!(PERSIST_FAILURES_TOTAL).increment(1);
                tracing::error!(key = %self.config.storage_key, error = %error, "Persisting snapshot failed");
                return Err(error.into());
            }
            metrics::counter!(PERSIST_WRITES_TOTAL).increment(1);
            tracing::debug!(key = %self.config.storage_key, bytes = encoded.len(), "Snapshot persisted");
            Ok(())
        }
    }
}
