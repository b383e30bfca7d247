//! The application: one store plus the input layer's edit session.

use crate::config::AppConfig;
use crate::edit::EditSession;
use crate::input::{self, InputEvent};
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoState};
use std::sync::Arc;
use tasklist_core::environment::UuidGenerator;
use tasklist_runtime::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use tasklist_runtime::{Store, StoreConfig, StoreError};

/// The store type the application runs on
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Owns the store and the edit session; all input goes through [`App::handle`]
pub struct App {
    store: TodoStore,
    session: EditSession,
}

impl App {
    /// Wrap an already built store
    #[must_use]
    pub fn new(store: TodoStore) -> Self {
        Self {
            store,
            session: EditSession::new(),
        }
    }

    /// Open the store described by `config`, reading the persisted list once
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the snapshot cannot be read.
    pub fn open(config: &AppConfig) -> Result<Self, StoreError> {
        let storage: Box<dyn KeyValueStorage> = if config.storage.in_memory {
            Box::new(MemoryStorage::new())
        } else {
            Box::new(FileStorage::new(&config.storage.data_dir))
        };
        Self::open_with(storage, &config.storage.key)
    }

    /// Open a store over `storage`, reading `key` once
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the snapshot cannot be read.
    pub fn open_with(storage: impl KeyValueStorage + 'static, key: &str) -> Result<Self, StoreError> {
        let environment = TodoEnvironment::new(Arc::new(UuidGenerator));
        let store = Store::open(TodoReducer::new(), environment, storage, StoreConfig::new(key))?;
        tracing::info!(key, items = store.state(TodoState::count), "Task list loaded");
        Ok(Self::new(store))
    }

    /// Route one input event through the dispatch table and send the
    /// resulting actions
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`]; storage failures are never dropped.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), StoreError> {
        let session = &mut self.session;
        let actions = self.store.state(|state| input::dispatch(session, state, event));
        for action in actions {
            self.store.send(action)?;
        }
        Ok(())
    }

    /// Apply a navigation route (`#/active`, `/all`, ...)
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Render`] if the re-render fails.
    pub fn navigate(&mut self, route: &str) -> Result<(), StoreError> {
        self.handle(InputEvent::ChangeFilter {
            route: route.to_string(),
        })
    }

    /// Id of the `n`th visible row, counting from 1
    #[must_use]
    pub fn visible_id(&self, n: usize) -> Option<TodoId> {
        let index = n.checked_sub(1)?;
        self.store
            .state(|s| s.filtered_items().nth(index).map(|t| t.id.clone()))
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Mutable access to the store, e.g. to register renderers
    pub fn store_mut(&mut self) -> &mut TodoStore {
        &mut self.store
    }

    /// The edit session
    #[must_use]
    pub const fn session(&self) -> &EditSession {
        &self.session
    }
}
