#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use stundenreport::libs::config::CompanyConfig;
    use stundenreport::libs::entry::TimeEntry;
    use stundenreport::libs::export::{Exporter, OutputFormat};
    use stundenreport::libs::months::GermanMonths;
    use stundenreport::libs::pdf::PdfRenderer;
    use stundenreport::libs::report::{assemble, ReportBundle};
    use stundenreport::libs::selection::{ProjectChoice, Selection};
    use tempfile::TempDir;

    fn bundle() -> ReportBundle {
        let entries = vec![
            TimeEntry {
                description: "Abstimmung mit dem Team zur Einführung des neuen Portals".to_string(),
                user_name: "Maria".to_string(),
                client_id: "c1".to_string(),
                client_name: "Acme".to_string(),
                project_id: "p1".to_string(),
                project_name: "Portal".to_string(),
                task_name: "Planung".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
                duration_hours: 1.5,
            },
            TimeEntry {
                description: "Wartung".to_string(),
                user_name: "Maria".to_string(),
                client_id: "c1".to_string(),
                client_name: "Acme".to_string(),
                project_id: "p1".to_string(),
                project_name: "Portal".to_string(),
                task_name: "Allgemein".to_string(),
                start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                duration_hours: 2.25,
            },
        ];
        let selection = Selection {
            client_id: "c1".to_string(),
            client_name: "Acme".to_string(),
            projects: ProjectChoice::Named(vec!["Portal".to_string()]),
        };
        assemble(&selection, entries, &GermanMonths).unwrap()
    }

    fn company() -> CompanyConfig {
        CompanyConfig {
            name: "Inpro Analytics GmbH".to_string(),
            logo_path: None,
        }
    }

    #[test]
    fn test_default_output_path_follows_suggested_filename() {
        let exporter = Exporter::new(OutputFormat::Csv, None, &bundle());
        assert_eq!(
            exporter.output_path().to_string_lossy(),
            "Stundenauflistung_Acme_Portal_06_07_2025.csv"
        );
    }

    #[test]
    fn test_csv_export_writes_rows_and_total() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        let exporter = Exporter::new(OutputFormat::Csv, Some(path.clone()), &bundle());
        exporter.export(&bundle(), &company()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Beschreibung,Aufgabe,Datum,Dauer");
        assert_eq!(lines.len(), 4); // header + 2 rows + total
        assert!(lines[1].contains("10.06.2025"));
        assert!(lines[3].starts_with("Gesamtaufwand"));
        assert!(lines[3].contains("3,75 h"));
    }

    #[test]
    fn test_json_export_carries_exact_total() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        Exporter::new(OutputFormat::Json, Some(path.clone()), &bundle())
            .export(&bundle(), &company())
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["client"], "Acme");
        assert_eq!(value["period"], "Juni/Juli 2025");
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
        assert!((value["total_hours"].as_f64().unwrap() - 3.75).abs() < 1e-9);
    }

    #[test]
    fn test_excel_export_creates_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.xlsx");
        Exporter::new(OutputFormat::Excel, Some(path.clone()), &bundle())
            .export(&bundle(), &company())
            .unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_pdf_renderer_produces_a_document() {
        let bytes = PdfRenderer::new("Inpro Analytics GmbH", None).render_to_bytes(&bundle()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_missing_logo_degrades_gracefully() {
        let renderer = PdfRenderer::new("Inpro Analytics GmbH", Some("does/not/exist.png".into()));
        let bytes = renderer.render_to_bytes(&bundle()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_pdf_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.pdf");
        Exporter::new(OutputFormat::Pdf, Some(path.clone()), &bundle())
            .export(&bundle(), &company())
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
