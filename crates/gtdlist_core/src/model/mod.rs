//! Domain model for GTD task records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, query and I/O code.
//!
//! # Invariants
//! - Every record is identified by a stable positive `TaskId`.
//! - Closed attribute sets (priority, energy) are real enums; open ones
//!   (category, status, context) keep their string form on the wire.

pub mod task;
