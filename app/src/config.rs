//! Configuration management for the task list.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file in the working directory, when present, fills in variables
//! the process environment does not already set.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Storage configuration
    pub storage: StorageConfig,
    /// Initial route, e.g. `/active` (default: `/all`)
    pub initial_route: String,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot file
    pub data_dir: PathBuf,
    /// Key the item list is stored under
    pub key: String,
    /// Keep everything in memory; nothing survives the process
    pub in_memory: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                data_dir: PathBuf::from(".tasklist"),
                key: "todos".to_string(),
                in_memory: false,
            },
            initial_route: crate::router::DEFAULT_ROUTE.to_string(),
            log_filter: "tasklist=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load `.env` from the working directory, then read the environment
    #[must_use]
    pub fn load() -> Self {
        report_dotenv(dotenvy::dotenv().map(|_| ()));
        Self::from_env()
    }

    /// Load the env file at `path`, then read the environment
    ///
    /// Variables already set in the process take precedence over the file.
    #[must_use]
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        report_dotenv(dotenvy::from_path(path.as_ref()));
        Self::from_env()
    }

    /// Load configuration from environment variables.
    ///
    /// - `TASKLIST_DATA_DIR`: snapshot directory (default `.tasklist`)
    /// - `TASKLIST_STORAGE_KEY`: snapshot key (default `todos`)
    /// - `TASKLIST_IN_MEMORY`: `1`/`true` keeps state in memory only
    /// - `TASKLIST_ROUTE`: initial route (default `/all`)
    /// - `TASKLIST_LOG`: fallback log filter (default `tasklist=info`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            storage: StorageConfig {
                data_dir: lookup("TASKLIST_DATA_DIR")
                    .map_or(defaults.storage.data_dir, PathBuf::from),
                key: lookup("TASKLIST_STORAGE_KEY").unwrap_or(defaults.storage.key),
                in_memory: lookup("TASKLIST_IN_MEMORY")
                    .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")),
            },
            initial_route: lookup("TASKLIST_ROUTE").unwrap_or(defaults.initial_route),
            log_filter: lookup("TASKLIST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

fn report_dotenv(result: Result<(), dotenvy::Error>) {
    match result {
        Ok(()) => tracing::debug!("Loaded .env file"),
        Err(error) if error.not_found() => {},
        Err(error) => tracing::warn!(error = %error, "Ignoring unreadable .env file"),
    }
}
