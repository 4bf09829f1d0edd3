//! Free-text capture parsing.
//!
//! # Responsibility
//! - Turn a quickly captured phrase into a structured task draft.
//! - Record every inference so callers can show what was assumed.
//!
//! # Invariants
//! - Parsing never fails; unrecognized text becomes an `Add` draft with
//!   the capture defaults.
//! - Detected cue words are stripped from the final item text.

use crate::model::task::{status, Category, Priority, TaskId, TaskRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static COMPLETE_VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(complete|done|finished|mark complete)\s+").expect("valid complete regex")
});
static DELETE_VERB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(delete|remove)\s+").expect("valid delete regex"));
static UPDATE_VERB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(update|change)\s+").expect("valid update regex"));

static CUE_WORD_RES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)\b(high priority|low priority|critical|urgent)\b")
            .expect("valid priority cue regex"),
        Regex::new(r"(?i)\b(for work|for office|professional|personal)\b")
            .expect("valid category cue regex"),
        Regex::new(r"(?i)\b(someday|maybe|waiting for|waiting on)\b")
            .expect("valid status cue regex"),
        Regex::new(r"(?i)\b(daily|weekly|monthly|recurring)\b").expect("valid recurrence cue regex"),
    ]
});
static EXTRA_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid ws regex"));

const PROFESSIONAL_CUES: &[&str] = &["work", "professional", "office", "client", "project"];
const CRITICAL_CUES: &[&str] = &["critical", "urgent", "asap", "immediately"];
const HIGH_CUES: &[&str] = &["high priority", "important"];
const LOW_CUES: &[&str] = &["low priority", "someday", "when possible"];

const CONTEXT_CUES: &[(&str, &[&str])] = &[
    ("@Computer", &["computer", "laptop", "online", "email", "digital"]),
    ("@Phone", &["call", "phone", "ring"]),
    ("@Office", &["office", "meeting"]),
    ("@Home", &["home", "house"]),
    ("@Errands", &["buy", "shop", "pick up", "errand", "store"]),
    ("@Thinking", &["think", "decide", "plan", "strategy", "consider"]),
    ("@Reading", &["read", "book", "article"]),
];
const DEFAULT_CONTEXT: &str = "@Anywhere";

/// What the captured phrase asks the store to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureAction {
    #[default]
    Add,
    Complete,
    Update,
    Delete,
}

/// Structured draft produced from one captured phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDraft {
    pub action: CaptureAction,
    /// Cleaned item text with detected cue words removed.
    pub item: String,
    pub category: Category,
    pub project: String,
    pub context: String,
    pub priority: Priority,
    pub status: String,
    /// Human-readable trail of every inference made while parsing.
    pub hints: Vec<String>,
}

impl CaptureDraft {
    /// Converts the draft into a record under the given id, keeping the
    /// capture defaults for fields a phrase cannot express.
    pub fn into_record(self, id: TaskId) -> TaskRecord {
        let mut record = TaskRecord::new(id, self.item);
        record.category = self.category;
        record.project = self.project;
        record.context = self.context;
        record.priority = self.priority;
        record.status = self.status;
        record
    }
}

/// Capture parser with a configurable project cue table.
///
/// Category, priority, context and status cues are built in; project names
/// are caller data, so their cues are registered per parser.
#[derive(Debug, Clone, Default)]
pub struct CaptureParser {
    /// `(project label, cue words)` pairs checked in order; first hit wins.
    project_cues: Vec<(String, Vec<String>)>,
}

impl CaptureParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers cue words that map a phrase onto a project label.
    pub fn with_project_cues<I, S>(mut self, project: impl Into<String>, cues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.project_cues.push((
            project.into(),
            cues.into_iter()
                .map(|cue| cue.into().to_lowercase())
                .collect(),
        ));
        self
    }

    /// Parses one captured phrase into a draft.
    pub fn parse(&self, text: &str) -> CaptureDraft {
        let mut hints = Vec::new();
        let (action, rest) = detect_action(text.trim());
        let lowered = rest.to_lowercase();

        let category = if PROFESSIONAL_CUES.iter().any(|cue| lowered.contains(cue)) {
            hints.push("category: Professional".to_string());
            Category::Professional
        } else {
            Category::Personal
        };

        let priority = detect_priority(&lowered, &mut hints);
        let context = detect_context(&lowered, &mut hints);
        let status = detect_status(&lowered, &mut hints);
        let project = self.detect_project(&lowered, &mut hints);

        CaptureDraft {
            action,
            item: strip_cue_words(rest),
            category,
            project,
            context,
            priority,
            status,
            hints,
        }
    }

    fn detect_project(&self, lowered: &str, hints: &mut Vec<String>) -> String {
        for (project, cues) in &self.project_cues {
            if cues.iter().any(|cue| lowered.contains(cue.as_str())) {
                hints.push(format!("project: {project}"));
                return project.clone();
            }
        }
        String::new()
    }
}

fn detect_action(text: &str) -> (CaptureAction, &str) {
    if let Some(found) = COMPLETE_VERB_RE.find(text) {
        return (CaptureAction::Complete, &text[found.end()..]);
    }
    if let Some(found) = DELETE_VERB_RE.find(text) {
        return (CaptureAction::Delete, &text[found.end()..]);
    }
    if let Some(found) = UPDATE_VERB_RE.find(text) {
        return (CaptureAction::Update, &text[found.end()..]);
    }
    (CaptureAction::Add, text)
}

fn detect_priority(lowered: &str, hints: &mut Vec<String>) -> Priority {
    let detected = if CRITICAL_CUES.iter().any(|cue| lowered.contains(cue)) {
        Priority::Critical
    } else if HIGH_CUES.iter().any(|cue| lowered.contains(cue)) {
        Priority::High
    } else if LOW_CUES.iter().any(|cue| lowered.contains(cue)) {
        Priority::Low
    } else {
        return Priority::Medium;
    };
    hints.push(format!("priority: {detected}"));
    detected
}

fn detect_context(lowered: &str, hints: &mut Vec<String>) -> String {
    for (context, cues) in CONTEXT_CUES {
        if cues.iter().any(|cue| lowered.contains(cue)) {
            hints.push(format!("context: {context}"));
            return (*context).to_string();
        }
    }
    DEFAULT_CONTEXT.to_string()
}

fn detect_status(lowered: &str, hints: &mut Vec<String>) -> String {
    let detected = if lowered.contains("waiting for") || lowered.contains("waiting on") {
        status::WAITING_FOR.to_string()
    } else if lowered.contains("someday") || lowered.contains("maybe") {
        status::SOMEDAY_MAYBE.to_string()
    } else if lowered.contains("daily") {
        format!("{} - Daily", status::RECURRING_PREFIX)
    } else if lowered.contains("weekly") {
        format!("{} - Weekly", status::RECURRING_PREFIX)
    } else if lowered.contains("monthly") {
        format!("{} - Monthly", status::RECURRING_PREFIX)
    } else {
        return status::NEXT_ACTION.to_string();
    };
    hints.push(format!("status: {detected}"));
    detected
}

fn strip_cue_words(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in CUE_WORD_RES.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    EXTRA_SPACE_RE.replace_all(&cleaned, " ").trim().to_string()
}
