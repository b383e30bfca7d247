//! Metrics for observability.
//!
//! The store records counters through the `metrics` facade. Nothing is
//! exported unless the host installs a recorder; without one every counter
//! is a no-op.
//!
//! # Example
//!
//! ```
//! use tasklist_runtime::metrics::register_metrics;
//!
//! // Describe all metrics once, after installing a recorder
//! register_metrics();
//! ```

use metrics::describe_counter;

/// Actions reduced by a store
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Successful snapshot writes
pub const PERSIST_WRITES_TOTAL: &str = "store.persist.writes.total";

/// Snapshot writes rejected by the storage backend
pub const PERSIST_FAILURES_TOTAL: &str = "store.persist.failures.total";

/// Render passes (one per render effect or explicit render)
pub const RENDERS_TOTAL: &str = "store.renders.total";

/// Register descriptions for every store metric
pub fn register_metrics() {
    describe_counter!(
        ACTIONS_TOTAL,
        "Total number of actions reduced by the store"
    );
    describe_counter!(
        PERSIST_WRITES_TOTAL,
        "Total number of snapshot writes to durable storage"
    );
    describe_counter!(
        PERSIST_FAILURES_TOTAL,
        "Total number of snapshot writes that failed"
    );
    describe_counter!(RENDERS_TOTAL, "Total number of render passes");
}
