//! Shared CLI helpers

use crate::error::{Result, TicketFlowError};
use chrono::{DateTime, NaiveDate, Utc};
use std::env;
use std::path::PathBuf;

/// Name of the project data directory
pub const DATA_DIR: &str = ".ticketflow";

/// Locate the project root by walking up from the starting directory
///
/// The project root is the closest ancestor containing a `.ticketflow`
/// directory.
pub fn find_project_root(project_dir: Option<&str>) -> Result<PathBuf> {
    let start = match project_dir {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };

    let mut current = start.as_path();
    loop {
        if current.join(DATA_DIR).is_dir() {
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Err(TicketFlowError::ProjectNotInitialized),
        }
    }
}

/// Parse a `--since` bound; date-only input means the start of that day
pub fn parse_since(input: &str) -> Result<DateTime<Utc>> {
    parse_date_time(input, false)
}

/// Parse an `--until` bound; date-only input means the end of that day
pub fn parse_until(input: &str) -> Result<DateTime<Utc>> {
    parse_date_time(input, true)
}

fn parse_date_time(input: &str, end_of_day: bool) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let time = if end_of_day {
            date.and_hms_opt(23, 59, 59)
        } else {
            date.and_hms_opt(0, 0, 0)
        };
        if let Some(naive) = time {
            return Ok(naive.and_utc());
        }
    }

    Err(TicketFlowError::InvalidInput(format!(
        "Invalid date '{input}'. Use YYYY-MM-DD or an RFC 3339 timestamp"
    )))
}
