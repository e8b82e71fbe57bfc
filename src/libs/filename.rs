//! Deterministic report filenames.
//!
//! `Stundenauflistung_{client}{_projects}_{period}.pdf`, where the period
//! segment enumerates every calendar month between the first and last entry
//! date. The prefix is a business-identity constant.

use chrono::{Datelike, NaiveDate};

const FILENAME_PREFIX: &str = "Stundenauflistung";

/// Sentinels that mean "all projects" and suppress the project segment.
const ALL_PROJECT_SENTINELS: [&str; 2] = ["alle projekte", "alle"];

/// Builds the suggested report filename.
///
/// The project segment is omitted when the selection denotes all projects
/// (empty list or only sentinel values, case-insensitive); otherwise each
/// name contributes one underscore-joined token. The period segment covers
/// every month from `first_date` through `last_date`, grouped per year as
/// `MM[_MM...]_YYYY` and joined with `--` when the span crosses years.
///
/// Callers must ensure `first_date <= last_date`.
pub fn build_filename(client_name: &str, selected_projects: &[String], first_date: NaiveDate, last_date: NaiveDate) -> String {
    let project_part = if denotes_all_projects(selected_projects) {
        String::new()
    } else {
        let tokens: Vec<String> = selected_projects.iter().map(|p| sanitize(p)).collect();
        format!("_{}", tokens.join("_"))
    };

    format!(
        "{}_{}{}_{}.pdf",
        FILENAME_PREFIX,
        client_name,
        project_part,
        period_segment(first_date, last_date)
    )
}

fn denotes_all_projects(projects: &[String]) -> bool {
    projects.is_empty() || projects.iter().all(|p| ALL_PROJECT_SENTINELS.contains(&p.trim().to_lowercase().as_str()))
}

/// Spaces and path separators become underscores.
fn sanitize(name: &str) -> String {
    name.replace(['/', '\\', ' '], "_")
}

fn period_segment(first_date: NaiveDate, last_date: NaiveDate) -> String {
    // Enumerate every (year, month) from first through last, wrapping the
    // year at December.
    let mut months: Vec<(i32, u32)> = Vec::new();
    let (mut year, mut month) = (first_date.year(), first_date.month());
    let last = (last_date.year(), last_date.month());
    while (year, month) <= last {
        months.push((year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    // Group chronologically by year.
    let mut groups: Vec<(i32, Vec<u32>)> = Vec::new();
    for (y, m) in months {
        match groups.last_mut() {
            Some((group_year, group_months)) if *group_year == y => group_months.push(m),
            _ => groups.push((y, vec![m])),
        }
    }

    let rendered: Vec<String> = groups
        .iter()
        .map(|(y, ms)| {
            let month_part = ms.iter().map(|m| format!("{:02}", m)).collect::<Vec<_>>().join("_");
            format!("{}_{}", month_part, y)
        })
        .collect();
    rendered.join("--")
}
