//! CLI summary entry point.
//!
//! # Responsibility
//! - Load a task file through `gtdlist_core` and print its summary counts.
//! - Keep output deterministic for quick local sanity checks.

use gtdlist_core::{read_tasks, TaskStore};
use std::fmt::Write as _;
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: gtdlist_cli <tasks.json>");
        return ExitCode::from(2);
    };

    match summarize(&path) {
        Ok(summary) => {
            print!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("gtdlist_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn summarize(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let store = TaskStore::from_records(read_tasks(path)?)?;
    let stats = store.stats();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "gtdlist_core version={}",
        gtdlist_core::core_version()
    );
    let _ = writeln!(out, "tasks total={}", stats.total);
    for (label, counts) in [
        ("category", &stats.by_category),
        ("priority", &stats.by_priority),
        ("status", &stats.by_status),
        ("context", &stats.by_context),
    ] {
        for (value, count) in counts {
            let _ = writeln!(out, "{label} {value}={count}");
        }
    }

    Ok(out)
}
