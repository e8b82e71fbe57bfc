#[cfg(test)]
mod tests {
    use stundenreport::api::clockify::{RawProject, RawTask, RawTimeEntry, RawTimeInterval};
    use stundenreport::libs::entry::{normalize_user_entries, GENERAL_TASK};

    fn raw(description: Option<&str>, task: Option<&str>, start: Option<&str>, end: Option<&str>) -> RawTimeEntry {
        RawTimeEntry {
            id: "e1".to_string(),
            description: description.map(String::from),
            project_id: Some("p1".to_string()),
            project: Some(RawProject {
                name: Some("Wartung".to_string()),
                client_id: Some("c1".to_string()),
                client_name: Some("Acme".to_string()),
            }),
            task: task.map(|name| RawTask {
                name: Some(name.to_string()),
            }),
            time_interval: Some(RawTimeInterval {
                start: start.map(String::from),
                end: end.map(String::from),
            }),
        }
    }

    #[test]
    fn test_all_display_fields_are_resolved() {
        let entries = normalize_user_entries(
            "Maria",
            &[raw(Some("Abstimmung"), Some("Planung"), Some("2025-06-10T08:00:00Z"), Some("2025-06-10T09:30:00Z"))],
        );
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.description, "Abstimmung");
        assert_eq!(entry.user_name, "Maria");
        assert_eq!(entry.client_id, "c1");
        assert_eq!(entry.client_name, "Acme");
        assert_eq!(entry.project_id, "p1");
        assert_eq!(entry.project_name, "Wartung");
        assert_eq!(entry.task_name, "Planung");
        assert_eq!(entry.formatted_date(), "10.06.2025");
        assert!((entry.duration_hours - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_description_becomes_empty_string() {
        let entries = normalize_user_entries("Maria", &[raw(None, None, Some("2025-06-10T08:00:00Z"), Some("2025-06-10T09:00:00Z"))]);
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn test_missing_or_blank_task_gets_placeholder() {
        let missing = normalize_user_entries("Maria", &[raw(None, None, Some("2025-06-10T08:00:00Z"), Some("2025-06-10T09:00:00Z"))]);
        assert_eq!(missing[0].task_name, GENERAL_TASK);

        let blank = normalize_user_entries("Maria", &[raw(None, Some("   "), Some("2025-06-10T08:00:00Z"), Some("2025-06-10T09:00:00Z"))]);
        assert_eq!(blank[0].task_name, GENERAL_TASK);
    }

    #[test]
    fn test_unparseable_intervals_are_dropped_not_fatal() {
        let entries = normalize_user_entries(
            "Maria",
            &[
                raw(Some("ok"), None, Some("2025-06-10T08:00:00Z"), Some("2025-06-10T09:00:00Z")),
                raw(Some("running timer"), None, Some("2025-06-10T08:00:00Z"), None),
                raw(Some("garbage"), None, Some("not-a-date"), Some("2025-06-10T09:00:00Z")),
                raw(Some("no interval"), None, None, None),
            ],
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "ok");
    }

    #[test]
    fn test_negative_interval_is_dropped() {
        let entries = normalize_user_entries("Maria", &[raw(None, None, Some("2025-06-10T09:00:00Z"), Some("2025-06-10T08:00:00Z"))]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_midnight_spanning_entry_belongs_to_start_day() {
        let entries = normalize_user_entries("Maria", &[raw(None, None, Some("2025-06-10T23:00:00Z"), Some("2025-06-11T01:00:00Z"))]);
        assert_eq!(entries[0].formatted_date(), "10.06.2025");
        assert!((entries[0].duration_hours - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_project_yields_empty_pairing() {
        let mut record = raw(None, None, Some("2025-06-10T08:00:00Z"), Some("2025-06-10T09:00:00Z"));
        record.project = None;
        record.project_id = None;
        let entries = normalize_user_entries("Maria", &[record]);
        let entry = &entries[0];
        assert_eq!(entry.client_id, "");
        assert_eq!(entry.client_name, "");
        assert_eq!(entry.project_id, "");
        assert_eq!(entry.project_name, "");
    }

    #[test]
    fn test_wire_format_deserializes_camel_case() {
        let payload = r#"{
            "id": "entry-1",
            "description": "Rollout",
            "projectId": "p7",
            "project": {"name": "Portal", "clientId": "c7", "clientName": "Globex"},
            "task": {"name": "Deployment"},
            "timeInterval": {"start": "2025-03-03T10:00:00Z", "end": "2025-03-03T12:15:00Z", "duration": "PT2H15M"}
        }"#;
        let record: RawTimeEntry = serde_json::from_str(payload).unwrap();
        let entries = normalize_user_entries("Jonas", &[record]);
        let entry = &entries[0];
        assert_eq!(entry.project_id, "p7");
        assert_eq!(entry.client_name, "Globex");
        assert_eq!(entry.task_name, "Deployment");
        assert!((entry.duration_hours - 2.25).abs() < 1e-9);
    }
}
