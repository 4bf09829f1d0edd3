//! Core task record store for gtdlist.
//! This crate is the single source of truth for task list invariants.

pub mod capture;
pub mod io;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;

pub use capture::{CaptureAction, CaptureDraft, CaptureParser};
pub use io::{read_tasks, tasks_from_json, tasks_to_json, write_tasks, IoError, IoResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    status, Category, Energy, Priority, TaskId, TaskRecord, TaskValidationError,
};
pub use query::{
    field_text, Field, FieldCondition, FieldMatch, QueryError, QueryResult, TaskFilter,
};
pub use store::{StoreError, StoreResult, TaskStats, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
