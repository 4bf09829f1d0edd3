//! Task record domain model.
//!
//! # Responsibility
//! - Define the canonical GTD task record and its enumerated attributes.
//! - Validate the invariants every stored record must satisfy.
//!
//! # Invariants
//! - `id` is positive and never reused for another record in one store.
//! - `item` and `category` are non-empty.
//! - Serialization round-trips without loss; absent optional fields are
//!   omitted keys, not nulls.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u32;

/// Well-known workflow stage labels.
///
/// `TaskRecord::status` stays free-form so user-defined stages survive
/// round-trips; these are the labels the store's preset views recognize.
pub mod status {
    pub const NEXT_ACTION: &str = "Next Action";
    pub const PROJECT: &str = "Project";
    pub const WAITING_FOR: &str = "Waiting For";
    pub const SOMEDAY_MAYBE: &str = "Someday/Maybe";
    pub const ONGOING: &str = "Ongoing";
    pub const AS_NEEDED: &str = "As Needed";
    pub const COMPLETED: &str = "Completed";
    /// Prefix shared by all recurrence stages, e.g. `Recurring - Weekly`.
    pub const RECURRING_PREFIX: &str = "Recurring";
}

/// Life area a task belongs to.
///
/// Open to extension: unrecognized wire values are preserved verbatim in
/// `Other` instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Professional,
    Personal,
    Other(String),
}

impl Category {
    /// Canonical string form, matching the wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Professional => "Professional",
            Self::Personal => "Personal",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Professional" => Self::Professional,
            "Personal" => Self::Personal,
            _ => Self::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency rank. Wire form is the capitalized variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy level a task demands from the person doing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Energy {
    Low,
    Medium,
    High,
}

impl Energy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl Display for Energy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for a single task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Record ids start at 1; 0 is reserved as "no id".
    NonPositiveId,
    EmptyItem { id: TaskId },
    EmptyCategory { id: TaskId },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "task id must be positive"),
            Self::EmptyItem { id } => write!(f, "task {id} has an empty item"),
            Self::EmptyCategory { id } => write!(f, "task {id} has an empty category"),
        }
    }
}

impl Error for TaskValidationError {}

/// One unit of actionable or reference information with GTD metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Stable handle, unique across a store, immutable once assigned.
    pub id: TaskId,
    /// Task description.
    pub item: String,
    pub category: Category,
    /// Free-form grouping label; not a foreign key to any project entity.
    pub project: String,
    /// Setting required to act, by convention `@`-prefixed, e.g. `@Phone`.
    pub context: String,
    pub priority: Priority,
    /// Free-form workflow stage; see [`status`] for the recognized labels.
    pub status: String,
    pub energy: Energy,
    /// Free-form duration estimate, may be empty.
    pub time: String,
    #[serde(default)]
    pub notes: String,
    /// Blocking dependency, present when the status implies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiting_for: Option<String>,
    /// Free-form due date or period, e.g. `Q1 2026`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

impl TaskRecord {
    /// Creates a record with the given handle and description and the
    /// capture defaults for everything else.
    pub fn new(id: TaskId, item: impl Into<String>) -> Self {
        Self {
            id,
            item: item.into(),
            category: Category::Personal,
            project: String::new(),
            context: "@Anywhere".to_string(),
            priority: Priority::Medium,
            status: status::NEXT_ACTION.to_string(),
            energy: Energy::Medium,
            time: String::new(),
            notes: String::new(),
            waiting_for: None,
            due: None,
        }
    }

    /// Checks the invariants every stored record must satisfy.
    ///
    /// # Errors
    /// - [`TaskValidationError::NonPositiveId`] when `id` is zero.
    /// - [`TaskValidationError::EmptyItem`] when the description is blank.
    /// - [`TaskValidationError::EmptyCategory`] when the category label is blank.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id == 0 {
            return Err(TaskValidationError::NonPositiveId);
        }
        if self.item.trim().is_empty() {
            return Err(TaskValidationError::EmptyItem { id: self.id });
        }
        if self.category.as_str().trim().is_empty() {
            return Err(TaskValidationError::EmptyCategory { id: self.id });
        }
        Ok(())
    }

    /// Whether the status marks a recurring task, e.g. `Recurring - Weekly`.
    pub fn is_recurring(&self) -> bool {
        self.status.starts_with(status::RECURRING_PREFIX)
    }

    /// Whether the task sits in the top two urgency ranks.
    pub fn is_high_priority(&self) -> bool {
        matches!(self.priority, Priority::High | Priority::Critical)
    }
}
