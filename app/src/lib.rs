//! A task list with persisted state and a full-recompute view.
//!
//! Users add, edit, complete, filter and delete short text items. Every
//! mutation flows through one loop:
//!
//! ```text
//! input event → dispatch table → reducer → persist snapshot → render
//! ```
//!
//! - [`types`]: items, filters, state and actions
//! - [`reducer`]: the mutation rules
//! - [`view`]: stateless projection of state into what the screen shows
//! - [`paint`]: plain-text painter for that projection
//! - [`edit`]: per-row edit session with an explicit abort flag
//! - [`input`]: input events and the dispatch table
//! - [`router`]: navigation routes to filters
//! - [`app`]: the owning application object
//!
//! # Quick Start
//!
//! ```
//! use tasklist::{App, InputEvent};
//! use tasklist_runtime::storage::MemoryStorage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = MemoryStorage::new();
//! let mut app = App::open_with(storage.clone(), "todos")?;
//!
//! app.handle(InputEvent::SubmitNew { text: "Walk dog".into() })?;
//!
//! // Simulate a restart: a fresh app over the same storage
//! let reopened = App::open_with(storage, "todos")?;
//! let titles: Vec<String> = reopened
//!     .store()
//!     .state(|s| s.todos.iter().map(|t| t.title.clone()).collect());
//! assert_eq!(titles, vec!["Walk dog"]);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod edit;
pub mod input;
pub mod paint;
pub mod reducer;
pub mod router;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use app::{App, TodoStore};
pub use input::InputEvent;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Filter, TodoAction, TodoId, TodoItem, TodoState};
