//! JSON import and export for task records.
//!
//! # Responsibility
//! - Read and write the flat JSON array that is the system's only
//!   externally observable data shape.
//! - Keep parse failures distinguishable from filesystem failures.
//!
//! # Invariants
//! - `write_tasks` followed by `read_tasks` yields structurally equal records.
//! - Output is pretty-printed with a trailing newline.

use crate::model::task::TaskRecord;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type IoResult<T> = Result<T, IoError>;

/// I/O-layer error for task file import and export.
#[derive(Debug)]
pub enum IoError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
}

impl Display for IoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read task file `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write task file `{}`: {source}", path.display())
            }
            Self::Parse(source) => write!(f, "invalid task JSON: {source}"),
            Self::Serialize(source) => write!(f, "failed to serialize tasks: {source}"),
        }
    }
}

impl Error for IoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Parse(source) => Some(source),
            Self::Serialize(source) => Some(source),
        }
    }
}

/// Parses records from the JSON literal shape.
///
/// Structural problems (missing `id`, wrong types) surface here as
/// [`IoError::Parse`] with the position `serde_json` reports.
pub fn tasks_from_json(json: &str) -> IoResult<Vec<TaskRecord>> {
    serde_json::from_str(json).map_err(IoError::Parse)
}

/// Serializes records back to the JSON literal shape.
pub fn tasks_to_json(records: &[TaskRecord]) -> IoResult<String> {
    let mut json = serde_json::to_string_pretty(records).map_err(IoError::Serialize)?;
    json.push('\n');
    Ok(json)
}

/// Reads and parses a task file.
///
/// # Side effects
/// - Emits `tasks_read` logging events with path and outcome.
pub fn read_tasks(path: impl AsRef<Path>) -> IoResult<Vec<TaskRecord>> {
    let path = path.as_ref();

    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(source) => {
            error!(
                "event=tasks_read module=io status=error path={} error_code=read_failed error={source}",
                path.display()
            );
            return Err(IoError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match tasks_from_json(&json) {
        Ok(records) => {
            info!(
                "event=tasks_read module=io status=ok path={} count={}",
                path.display(),
                records.len()
            );
            Ok(records)
        }
        Err(err) => {
            error!(
                "event=tasks_read module=io status=error path={} error_code=parse_failed error={err}",
                path.display()
            );
            Err(err)
        }
    }
}

/// Serializes records and writes them to a task file.
///
/// # Side effects
/// - Emits `tasks_write` logging events with path and outcome.
pub fn write_tasks(path: impl AsRef<Path>, records: &[TaskRecord]) -> IoResult<()> {
    let path = path.as_ref();
    let json = tasks_to_json(records)?;

    match fs::write(path, json) {
        Ok(()) => {
            info!(
                "event=tasks_write module=io status=ok path={} count={}",
                path.display(),
                records.len()
            );
            Ok(())
        }
        Err(source) => {
            error!(
                "event=tasks_write module=io status=error path={} error_code=write_failed error={source}",
                path.display()
            );
            Err(IoError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
