//! CLI command implementations

pub mod activity;
pub mod auth;
pub mod daily;
pub mod dashboard;
pub mod demo;
pub mod expense;
mod input;
pub mod logs;
pub mod settings;
pub mod status;
pub mod timestamp;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use uuid::Uuid;

use daylog_core::domain::Record;
use daylog_core::services::{EntryPoint, LogEvent, LoggingService, RecordList};
use daylog_core::{DaylogContext, User};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let daylog_dir = get_daylog_dir().ok()?;
    std::fs::create_dir_all(&daylog_dir).ok()?;
    LoggingService::new(&daylog_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the data directory from `DAYLOG_DIR` or default to ~/.daylog
pub fn get_daylog_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("DAYLOG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".daylog"))
        .ok_or_else(|| anyhow!("Could not find home directory. Set DAYLOG_DIR instead"))
}

/// Open the context for the current data directory
pub fn get_context() -> Result<DaylogContext> {
    let daylog_dir = get_daylog_dir()?;
    DaylogContext::new(&daylog_dir).context("Failed to initialize daylog context")
}

/// The signed-in user, or the "not logged in" error
pub fn require_login(ctx: &DaylogContext) -> Result<&User> {
    Ok(ctx.auth.require_user()?)
}

/// Resolve a record reference: a 1-based list position or an id (prefix)
pub fn resolve_record<R: Record>(list: &RecordList<R>, target: &str) -> Result<Uuid> {
    let target = target.trim();

    if let Ok(position) = target.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| list.records().get(index))
            .map(|r| r.id())
            .ok_or_else(|| anyhow!("No entry at position {}", position));
    }

    let wanted = target.to_lowercase();
    let matches: Vec<Uuid> = list
        .records()
        .iter()
        .map(|r| r.id())
        .filter(|id| id.to_string().starts_with(&wanted))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(anyhow!("No entry with id {}", target)),
        _ => Err(anyhow!("Id prefix {} is ambiguous", target)),
    }
}

/// Short form of an id for tables
pub fn short_id(id: Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
