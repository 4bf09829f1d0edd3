//! Summary statistics over a task store.
//!
//! # Responsibility
//! - Derive dashboard-style counts from the store's grouping queries.
//!
//! # Invariants
//! - Key order inside each dimension follows first appearance in the store.

use super::TaskStore;
use crate::query::Field;
use serde::Serialize;

/// Record counts across the dashboard dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub by_category: Vec<(String, usize)>,
    pub by_priority: Vec<(String, usize)>,
    pub by_status: Vec<(String, usize)>,
    pub by_context: Vec<(String, usize)>,
}

impl TaskStats {
    pub(crate) fn collect(store: &TaskStore) -> Self {
        Self {
            total: store.len(),
            by_category: store.counts_by(Field::Category),
            by_priority: store.counts_by(Field::Priority),
            by_status: store.counts_by(Field::Status),
            by_context: store.counts_by(Field::Context),
        }
    }
}
