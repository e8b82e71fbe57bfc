#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use stundenreport::libs::entry::TimeEntry;
    use stundenreport::libs::error::ReportError;
    use stundenreport::libs::months::GermanMonths;
    use stundenreport::libs::report::{assemble, format_hours};
    use stundenreport::libs::selection::{EntrySet, ProjectChoice, Selection};

    fn entry(description: &str, client_id: &str, client_name: &str, project: &str, date: (i32, u32, u32), hours: f64) -> TimeEntry {
        TimeEntry {
            description: description.to_string(),
            user_name: "Maria".to_string(),
            client_id: client_id.to_string(),
            client_name: client_name.to_string(),
            project_id: format!("{}-id", project),
            project_name: project.to_string(),
            task_name: "Allgemein".to_string(),
            start_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            duration_hours: hours,
        }
    }

    fn sample_rows() -> Vec<TimeEntry> {
        vec![
            entry("b", "c1", "Acme", "Wartung", (2025, 7, 2), 2.5),
            entry("a", "c1", "Acme", "Portal", (2025, 6, 10), 1.25),
            entry("x", "c2", "acme", "Portal", (2025, 6, 11), 3.0),
            entry("c", "c1", "Acme", "Wartung", (2025, 6, 10), 0.75),
        ]
    }

    fn selection(projects: ProjectChoice) -> Selection {
        Selection {
            client_id: "c1".to_string(),
            client_name: "Acme".to_string(),
            projects,
        }
    }

    #[test]
    fn test_filter_by_client_id_is_exact() {
        // Two clients share the display name; the id filter keeps them apart.
        let rows = sample_rows().by_client_id("c1");
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.client_id == "c1"));
    }

    #[test]
    fn test_filter_by_client_name_is_case_insensitive() {
        let rows = sample_rows().by_client_name("ACME");
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_filter_by_projects_membership() {
        let choice = ProjectChoice::Named(vec!["Wartung".to_string()]);
        let rows = sample_rows().by_client_id("c1").by_projects(&choice);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.project_name == "Wartung"));
    }

    #[test]
    fn test_absent_project_yields_empty_set_not_error() {
        let choice = ProjectChoice::Named(vec!["Unbekannt".to_string()]);
        let rows = sample_rows().by_projects(&choice);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_all_projects_wildcard_keeps_everything() {
        assert_eq!(sample_rows().by_projects(&ProjectChoice::All).len(), 4);
        assert_eq!(ProjectChoice::from_names(vec![]), ProjectChoice::All);
    }

    #[test]
    fn test_sort_is_stable_on_equal_dates() {
        let rows = sample_rows().by_client_id("c1").sorted_by_date();
        // 2025-06-10 appears twice; fetch order ("a" before "c") is kept.
        assert_eq!(rows[0].description, "a");
        assert_eq!(rows[1].description, "c");
        assert_eq!(rows[2].description, "b");
    }

    #[test]
    fn test_project_names_are_distinct_and_sorted() {
        assert_eq!(sample_rows().project_names(), vec!["Portal".to_string(), "Wartung".to_string()]);
    }

    #[test]
    fn test_client_pairs_distinct_by_identifier() {
        let pairs = sample_rows().client_pairs();
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(&("c1".to_string(), "Acme".to_string())));
        assert!(pairs.contains(&("c2".to_string(), "acme".to_string())));
    }

    #[test]
    fn test_assemble_totals_and_formatting() {
        let rows = sample_rows().by_client_id("c1");
        let bundle = assemble(&selection(ProjectChoice::All), rows, &GermanMonths).unwrap();

        assert_eq!(bundle.rows.len(), 3);
        assert!((bundle.total_hours - 4.5).abs() < 1e-9);
        assert_eq!(bundle.months_label, "Juni/Juli 2025");

        // Rows are date-sorted and display-formatted.
        assert_eq!(bundle.rows[0].date, "10.06.2025");
        assert_eq!(bundle.rows[0].duration, "1,25");
        assert_eq!(bundle.rows[2].date, "02.07.2025");
        assert_eq!(bundle.rows[2].duration, "2,50");
    }

    #[test]
    fn test_removing_a_row_changes_total_by_its_duration() {
        let rows = sample_rows().by_client_id("c1");
        let full = assemble(&selection(ProjectChoice::All), rows.clone(), &GermanMonths).unwrap();

        let without_last: Vec<_> = rows.iter().cloned().filter(|r| r.description != "b").collect();
        let reduced = assemble(&selection(ProjectChoice::All), without_last, &GermanMonths).unwrap();

        assert!((full.total_hours - reduced.total_hours - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_empty_rows_is_contract_failure() {
        let result = assemble(&selection(ProjectChoice::All), vec![], &GermanMonths);
        assert_eq!(result.unwrap_err(), ReportError::EmptyResultSet);
    }

    #[test]
    fn test_bundle_carries_span_and_filename() {
        let rows = sample_rows().by_client_id("c1").by_projects(&ProjectChoice::Named(vec!["Wartung".to_string()]));
        let bundle = assemble(&selection(ProjectChoice::Named(vec!["Wartung".to_string()])), rows, &GermanMonths).unwrap();

        assert_eq!(bundle.first_date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert_eq!(bundle.last_date, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap());
        assert_eq!(bundle.suggested_filename(), "Stundenauflistung_Acme_Wartung_06_07_2025.pdf");
    }

    #[test]
    fn test_format_hours_uses_comma_separator() {
        assert_eq!(format_hours(1.5), "1,50");
        assert_eq!(format_hours(0.0), "0,00");
        assert_eq!(format_hours(12.345), "12,35");
    }
}
