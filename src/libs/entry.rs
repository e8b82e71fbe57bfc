//! Normalized time-entry rows.
//!
//! Raw Clockify records arrive grouped per workspace user and with plenty of
//! optional fields. Normalization flattens them into [`TimeEntry`] rows with
//! every display field resolved, so nothing downstream has to deal with
//! absent values.

use crate::api::clockify::RawTimeEntry;
use chrono::{DateTime, NaiveDate};

/// Placeholder task label used when a record carries no task name.
pub const GENERAL_TASK: &str = "Allgemein";

/// One normalized time entry. All display fields are non-empty-or-defaulted
/// strings; `duration_hours` is never negative or NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub description: String,
    pub user_name: String,
    pub client_id: String,
    pub client_name: String,
    pub project_id: String,
    pub project_name: String,
    pub task_name: String,
    pub start_date: NaiveDate,
    pub duration_hours: f64,
}

impl TimeEntry {
    /// Start date in the report display format.
    pub fn formatted_date(&self) -> String {
        self.start_date.format("%d.%m.%Y").to_string()
    }
}

/// Flattens one user's raw records into [`TimeEntry`] rows.
///
/// Records whose interval cannot be parsed (missing or malformed start/end,
/// or an end before the start, as with a still-running timer) are dropped
/// with a warning. The batch itself never fails.
pub fn normalize_user_entries(user_name: &str, raw_entries: &[RawTimeEntry]) -> Vec<TimeEntry> {
    raw_entries
        .iter()
        .filter_map(|raw| match from_raw(user_name, raw) {
            Some(entry) => Some(entry),
            None => {
                tracing::warn!(entry_id = %raw.id, user = user_name, "dropping time entry with unparseable interval");
                None
            }
        })
        .collect()
}

/// Converts one raw record, or `None` if its interval is unusable.
fn from_raw(user_name: &str, raw: &RawTimeEntry) -> Option<TimeEntry> {
    let interval = raw.time_interval.as_ref()?;
    let start = DateTime::parse_from_rfc3339(interval.start.as_deref()?).ok()?;
    let end = DateTime::parse_from_rfc3339(interval.end.as_deref()?).ok()?;

    let duration_hours = (end - start).num_seconds() as f64 / 3600.0;
    if duration_hours < 0.0 {
        return None;
    }

    let project = raw.project.as_ref();
    // Entries spanning midnight are attributed to their start day.
    Some(TimeEntry {
        description: raw.description.clone().unwrap_or_default(),
        user_name: user_name.to_string(),
        client_id: project.and_then(|p| p.client_id.clone()).unwrap_or_default(),
        client_name: project.and_then(|p| p.client_name.clone()).unwrap_or_default(),
        project_id: raw.project_id.clone().unwrap_or_default(),
        project_name: project.and_then(|p| p.name.clone()).unwrap_or_default(),
        task_name: normalize_task_name(raw.task.as_ref().and_then(|t| t.name.as_deref())),
        start_date: start.date_naive(),
        duration_hours,
    })
}

/// Missing or blank task names collapse to the fixed placeholder.
fn normalize_task_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => GENERAL_TASK.to_string(),
    }
}
