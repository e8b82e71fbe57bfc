//! Report assembly: from a filtered row set to the renderer-ready bundle.
//!
//! The assembler is the last pure stage of the pipeline. It expects inputs
//! that are already resolved and validated; an empty row set reaching it is a
//! contract violation reported as [`ReportError::EmptyResultSet`].

use crate::libs::entry::TimeEntry;
use crate::libs::error::ReportError;
use crate::libs::filename::build_filename;
use crate::libs::months::{months_range_label, MonthNames};
use crate::libs::selection::{EntrySet, Selection};
use chrono::NaiveDate;
use serde::Serialize;

/// One display row of the report table, fully formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub description: String,
    pub task_name: String,
    pub date: String,
    pub duration: String,
}

/// The finalized payload handed to the renderer: ordered display rows, the
/// exact total, and the label bundle. Sole contract with the rendering side.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    pub client_name: String,
    pub project_names: Vec<String>,
    pub months_label: String,
    pub rows: Vec<ReportRow>,
    pub total_hours: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl ReportBundle {
    /// Suggested output filename for this report.
    pub fn suggested_filename(&self) -> String {
        build_filename(&self.client_name, &self.project_names, self.first_date, self.last_date)
    }
}

/// Builds the bundle from a resolved selection and its filtered entries.
///
/// Rows are sorted ascending by start date (stable, ties keep fetch order),
/// the total is the exact sum of `duration_hours`, and durations are
/// formatted with the business-locale decimal separator only at this display
/// boundary.
pub fn assemble(selection: &Selection, entries: Vec<TimeEntry>, names: &dyn MonthNames) -> Result<ReportBundle, ReportError> {
    let entries = entries.sorted_by_date();
    let (first, last) = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => (first.start_date, last.start_date),
        _ => return Err(ReportError::EmptyResultSet),
    };

    let total_hours = entries.total_hours();
    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.start_date).collect();

    let rows = entries
        .iter()
        .map(|entry| ReportRow {
            description: entry.description.clone(),
            task_name: entry.task_name.clone(),
            date: entry.formatted_date(),
            duration: format_hours(entry.duration_hours),
        })
        .collect();

    Ok(ReportBundle {
        client_name: selection.client_name.clone(),
        project_names: selection.projects.names().to_vec(),
        months_label: months_range_label(&dates, names),
        rows,
        total_hours,
        first_date: first,
        last_date: last,
    })
}

/// Formats fractional hours with two decimals and a comma separator.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours).replace('.', ",")
}
