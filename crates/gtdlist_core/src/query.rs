//! Field-level query surface over task records.
//!
//! # Responsibility
//! - Name record fields in a way callers can pass around as strings.
//! - Describe filter predicates as data, validated before execution.
//!
//! # Invariants
//! - Unknown field names are rejected before any record is visited.
//! - A field's text form is canonical: absent optional fields read as `""`.

use crate::model::task::TaskRecord;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Result type for query construction and execution.
pub type QueryResult<T> = Result<T, QueryError>;

/// Query-layer error for predicate validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The predicate references a field name no record has.
    UnknownField { field: String },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField { field } => {
                write!(f, "unknown task field `{field}`; expected one of ")?;
                for (position, known) in Field::ALL.iter().enumerate() {
                    if position > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(known.name())?;
                }
                Ok(())
            }
        }
    }
}

impl Error for QueryError {}

/// Addressable field of a [`TaskRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Item,
    Category,
    Project,
    Context,
    Priority,
    Status,
    Energy,
    Time,
    Notes,
    WaitingFor,
    Due,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Id,
        Field::Item,
        Field::Category,
        Field::Project,
        Field::Context,
        Field::Priority,
        Field::Status,
        Field::Energy,
        Field::Time,
        Field::Notes,
        Field::WaitingFor,
        Field::Due,
    ];

    /// Wire-format field name, as it appears in the JSON literal shape.
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Item => "item",
            Self::Category => "category",
            Self::Project => "project",
            Self::Context => "context",
            Self::Priority => "priority",
            Self::Status => "status",
            Self::Energy => "energy",
            Self::Time => "time",
            Self::Notes => "notes",
            Self::WaitingFor => "waiting_for",
            Self::Due => "due",
        }
    }
}

impl FromStr for Field {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == value)
            .ok_or_else(|| QueryError::UnknownField {
                field: value.to_string(),
            })
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical text form of one record field.
///
/// `id` renders through `to_string`; absent `waiting_for`/`due` render as
/// the empty string so predicates can match "not set" uniformly.
pub fn field_text(record: &TaskRecord, field: Field) -> Cow<'_, str> {
    match field {
        Field::Id => Cow::Owned(record.id.to_string()),
        Field::Item => Cow::Borrowed(record.item.as_str()),
        Field::Category => Cow::Borrowed(record.category.as_str()),
        Field::Project => Cow::Borrowed(record.project.as_str()),
        Field::Context => Cow::Borrowed(record.context.as_str()),
        Field::Priority => Cow::Borrowed(record.priority.as_str()),
        Field::Status => Cow::Borrowed(record.status.as_str()),
        Field::Energy => Cow::Borrowed(record.energy.as_str()),
        Field::Time => Cow::Borrowed(record.time.as_str()),
        Field::Notes => Cow::Borrowed(record.notes.as_str()),
        Field::WaitingFor => Cow::Borrowed(record.waiting_for.as_deref().unwrap_or("")),
        Field::Due => Cow::Borrowed(record.due.as_deref().unwrap_or("")),
    }
}

/// Expected value of one filter condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMatch {
    /// Exact equality against the field's text form.
    Equals(String),
    /// Set membership against the field's text form.
    OneOf(Vec<String>),
}

impl FieldMatch {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Equals(expected) => expected == value,
            Self::OneOf(expected) => expected.iter().any(|candidate| candidate == value),
        }
    }
}

/// One `field = value` or `field in {values}` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCondition {
    /// Wire-format field name; resolved (and rejected) at query execution.
    pub field: String,
    pub expected: FieldMatch,
}

/// Conjunction of field conditions over task records.
///
/// An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub conditions: Vec<FieldCondition>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality condition, e.g. `category = "Personal"`.
    pub fn equals(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push(FieldCondition {
            field: field.into(),
            expected: FieldMatch::Equals(value.into()),
        });
        self
    }

    /// Adds a set-membership condition, e.g. `priority in {"High", "Critical"}`.
    pub fn one_of<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.conditions.push(FieldCondition {
            field: field.into(),
            expected: FieldMatch::OneOf(values.into_iter().map(Into::into).collect()),
        });
        self
    }

    /// Resolves field names to typed fields, rejecting unknown ones.
    pub(crate) fn resolve(&self) -> QueryResult<Vec<(Field, FieldMatch)>> {
        self.conditions
            .iter()
            .map(|condition| {
                Ok((
                    condition.field.parse::<Field>()?,
                    condition.expected.clone(),
                ))
            })
            .collect()
    }
}
