//! In-memory task store.
//!
//! # Responsibility
//! - Hold validated task records in insertion order.
//! - Serve point lookups, filters, groupings and summary statistics.
//!
//! # Invariants
//! - `by_id` maps every stored id to its current position in `records`.
//! - A failed `load` leaves the previous contents untouched.
//! - Mutations never leave a duplicate or non-validated record behind.

pub mod stats;

use crate::model::task::{status, TaskId, TaskRecord, TaskValidationError};
use crate::query::{field_text, Field, FieldMatch, QueryError, TaskFilter};
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use stats::TaskStats;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for loading, lookups and queries.
#[derive(Debug)]
pub enum StoreError {
    Validation(TaskValidationError),
    DuplicateId(TaskId),
    NotFound(TaskId),
    Query(QueryError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate task id: {id}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Query(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Query(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<QueryError> for StoreError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}

/// Insertion-ordered collection of validated task records.
#[derive(Debug, Default)]
pub struct TaskStore {
    records: Vec<TaskRecord>,
    by_id: HashMap<TaskId, usize>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a loaded store in one call.
    pub fn from_records(records: impl IntoIterator<Item = TaskRecord>) -> StoreResult<Self> {
        let mut store = Self::new();
        store.load(records)?;
        Ok(store)
    }

    /// Replaces the store contents with a validated batch.
    ///
    /// Fails fast: the first invalid or duplicate record aborts the load
    /// with an error naming its id.
    ///
    /// # Invariants
    /// - On failure the store keeps whatever it held before the call.
    pub fn load(&mut self, records: impl IntoIterator<Item = TaskRecord>) -> StoreResult<()> {
        let mut incoming = Vec::new();
        let mut by_id = HashMap::new();

        for record in records {
            record.validate()?;
            if by_id.insert(record.id, incoming.len()).is_some() {
                return Err(StoreError::DuplicateId(record.id));
            }
            incoming.push(record);
        }

        info!(
            "event=store_load module=store status=ok count={}",
            incoming.len()
        );
        self.records = incoming;
        self.by_id = by_id;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order. This slice is the serialization form.
    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskRecord> {
        self.records.iter()
    }

    /// Point lookup by stable id.
    pub fn get(&self, id: TaskId) -> StoreResult<&TaskRecord> {
        self.by_id
            .get(&id)
            .map(|&position| &self.records[position])
            .ok_or(StoreError::NotFound(id))
    }

    /// Next free id for append-style flows: one past the highest in use.
    ///
    /// Ids are opaque unique keys; no contiguity is assumed or produced.
    pub fn next_id(&self) -> TaskId {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Appends a validated record with a previously unused id.
    pub fn insert(&mut self, record: TaskRecord) -> StoreResult<TaskId> {
        record.validate()?;
        if self.by_id.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }

        let id = record.id;
        self.by_id.insert(id, self.records.len());
        self.records.push(record);
        Ok(id)
    }

    /// Replaces the stored record sharing `record.id`.
    pub fn update(&mut self, record: TaskRecord) -> StoreResult<()> {
        record.validate()?;
        let position = *self
            .by_id
            .get(&record.id)
            .ok_or(StoreError::NotFound(record.id))?;
        self.records[position] = record;
        Ok(())
    }

    /// Removes and returns the record with the given id.
    pub fn remove(&mut self, id: TaskId) -> StoreResult<TaskRecord> {
        let position = self.by_id.remove(&id).ok_or(StoreError::NotFound(id))?;
        let removed = self.records.remove(position);

        // every record after the removal point shifted left by one
        for moved in &self.records[position..] {
            if let Some(entry) = self.by_id.get_mut(&moved.id) {
                *entry -= 1;
            }
        }

        Ok(removed)
    }

    /// Marks a task done by moving its status to `Completed`.
    pub fn complete(&mut self, id: TaskId) -> StoreResult<&TaskRecord> {
        let position = *self.by_id.get(&id).ok_or(StoreError::NotFound(id))?;
        self.records[position].status = status::COMPLETED.to_string();
        Ok(&self.records[position])
    }

    /// Lazily yields records matching every filter condition, in insertion
    /// order.
    ///
    /// # Errors
    /// - [`QueryError::UnknownField`] before any record is visited when a
    ///   condition names a field no record has.
    pub fn filter<'a>(
        &'a self,
        filter: &TaskFilter,
    ) -> StoreResult<impl Iterator<Item = &'a TaskRecord> + 'a> {
        let conditions: Vec<(Field, FieldMatch)> = filter.resolve()?;
        Ok(self.records.iter().filter(move |record| {
            conditions
                .iter()
                .all(|(field, expected)| expected.matches(field_text(record, *field).as_ref()))
        }))
    }

    /// Groups records by the named field.
    ///
    /// Group keys appear in first-seen order; members keep insertion order.
    pub fn group_by(&self, field: &str) -> StoreResult<Vec<(String, Vec<&TaskRecord>)>> {
        let field = field.parse::<Field>()?;
        Ok(self.group_by_field(field))
    }

    fn group_by_field(&self, field: Field) -> Vec<(String, Vec<&TaskRecord>)> {
        let mut groups: Vec<(String, Vec<&TaskRecord>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for record in &self.records {
            let key = field_text(record, field).into_owned();
            match positions.get(&key) {
                Some(&position) => groups[position].1.push(record),
                None => {
                    positions.insert(key.clone(), groups.len());
                    groups.push((key, vec![record]));
                }
            }
        }

        groups
    }

    /// Counts records per distinct value of the named field.
    ///
    /// Derived from [`TaskStore::group_by`]; same key order.
    pub fn counts(&self, field: &str) -> StoreResult<Vec<(String, usize)>> {
        let field = field.parse::<Field>()?;
        Ok(self.counts_by(field))
    }

    pub(crate) fn counts_by(&self, field: Field) -> Vec<(String, usize)> {
        self.group_by_field(field)
            .into_iter()
            .map(|(key, members)| (key, members.len()))
            .collect()
    }

    /// Case-insensitive substring search over item and project.
    ///
    /// Blank queries match nothing.
    pub fn search<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a TaskRecord> + 'a {
        let needle = text.trim().to_lowercase();
        self.records.iter().filter(move |record| {
            !needle.is_empty()
                && (record.item.to_lowercase().contains(&needle)
                    || record.project.to_lowercase().contains(&needle))
        })
    }

    /// Summary counts across the dashboard dimensions.
    pub fn stats(&self) -> TaskStats {
        TaskStats::collect(self)
    }

    /// Tasks ready to act on now.
    pub fn next_actions(&self) -> impl Iterator<Item = &TaskRecord> {
        self.with_status(status::NEXT_ACTION)
    }

    /// Multi-step outcomes tracked as projects.
    pub fn projects(&self) -> impl Iterator<Item = &TaskRecord> {
        self.with_status(status::PROJECT)
    }

    /// Tasks blocked on someone or something else.
    pub fn waiting_for(&self) -> impl Iterator<Item = &TaskRecord> {
        self.with_status(status::WAITING_FOR)
    }

    /// Ideas parked for a later review.
    pub fn someday_maybe(&self) -> impl Iterator<Item = &TaskRecord> {
        self.with_status(status::SOMEDAY_MAYBE)
    }

    /// Tasks on a recurrence cadence, any period.
    pub fn recurring(&self) -> impl Iterator<Item = &TaskRecord> {
        self.records.iter().filter(|record| record.is_recurring())
    }

    /// High and Critical priority tasks.
    pub fn high_priority(&self) -> impl Iterator<Item = &TaskRecord> {
        self.records
            .iter()
            .filter(|record| record.is_high_priority())
    }

    fn with_status<'a>(&'a self, expected: &'a str) -> impl Iterator<Item = &'a TaskRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.status == expected)
    }
}
