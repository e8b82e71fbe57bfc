//! Terminal table views for entries and report previews.

use crate::libs::entry::TimeEntry;
use crate::libs::report::{format_hours, ReportBundle};
use crate::libs::selection::EntrySet;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Normalized entries of a period, one row per entry.
    pub fn entries(entries: &Vec<TimeEntry>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "USER", "CLIENT", "PROJECT", "TASK", "HOURS", "DESCRIPTION"]);
        for entry in entries {
            table.add_row(row![
                entry.formatted_date(),
                entry.user_name,
                entry.client_name,
                entry.project_name,
                entry.task_name,
                format_hours(entry.duration_hours),
                entry.description
            ]);
        }
        table.printstd();
        println!("Total: {} h ({} entries)", format_hours(entries.total_hours()), entries.len());

        Ok(())
    }

    /// Preview of the assembled report table, as it will appear in the PDF.
    pub fn bundle(bundle: &ReportBundle) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["BESCHREIBUNG", "AUFGABE", "DATUM", "DAUER"]);
        for report_row in &bundle.rows {
            table.add_row(row![report_row.description, report_row.task_name, report_row.date, report_row.duration]);
        }
        table.add_row(row!["Gesamtaufwand", "", "", format!("{} h", format_hours(bundle.total_hours))]);
        table.printstd();

        Ok(())
    }
}
