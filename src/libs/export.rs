//! Report output in the supported formats.
//!
//! One dispatcher over PDF (the primary, client-facing format) and the data
//! formats CSV, JSON and Excel. All formats consume the same finalized
//! [`ReportBundle`]; the suggested report filename supplies the default
//! output path, with the extension switched per format.

use crate::libs::config::CompanyConfig;
use crate::libs::messages::Message;
use crate::libs::pdf::PdfRenderer;
use crate::libs::report::{format_hours, ReportBundle};
use crate::msg_success;
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Output format for a generated report.
#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Client-facing PDF report.
    Pdf,
    /// Comma-separated values of the report rows.
    Csv,
    /// Structured JSON with rows, total and labels.
    Json,
    /// Excel workbook with the report table.
    Excel,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Excel => "xlsx",
        }
    }
}

/// Writes one report bundle to disk in the configured format.
pub struct Exporter {
    format: OutputFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// `output_path` overrides the suggested filename; otherwise the bundle's
    /// deterministic name is used with the format's extension.
    pub fn new(format: OutputFormat, output_path: Option<PathBuf>, bundle: &ReportBundle) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let mut path = PathBuf::from(bundle.suggested_filename());
            path.set_extension(format.extension());
            path
        });
        Self { format, output_path }
    }

    pub fn export(&self, bundle: &ReportBundle, company: &CompanyConfig) -> Result<()> {
        match self.format {
            OutputFormat::Pdf => {
                PdfRenderer::new(&company.name, company.logo_path.clone()).render_to_file(bundle, &self.output_path)?;
            }
            OutputFormat::Csv => self.export_csv(bundle)?,
            OutputFormat::Json => self.export_json(bundle)?,
            OutputFormat::Excel => self.export_excel(bundle)?,
        }

        msg_success!(Message::ReportCreated(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    fn export_csv(&self, bundle: &ReportBundle) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Beschreibung", "Aufgabe", "Datum", "Dauer"])?;
        for row in &bundle.rows {
            wtr.write_record([&row.description, &row.task_name, &row.date, &row.duration])?;
        }
        let total = format!("{} h", format_hours(bundle.total_hours));
        wtr.write_record(["Gesamtaufwand", "", "", total.as_str()])?;
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, bundle: &ReportBundle) -> Result<()> {
        let json = serde_json::json!({
            "client": bundle.client_name,
            "projects": bundle.project_names,
            "period": bundle.months_label,
            "rows": bundle.rows,
            "total_hours": bundle.total_hours,
        });
        File::create(&self.output_path)?.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, bundle: &ReportBundle) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, format!("Stundenaufstellung {}", bundle.months_label), &title_format)?;
        worksheet.write_string_with_format(2, 0, "Beschreibung", &header_format)?;
        worksheet.write_string_with_format(2, 1, "Aufgabe", &header_format)?;
        worksheet.write_string_with_format(2, 2, "Datum", &header_format)?;
        worksheet.write_string_with_format(2, 3, "Dauer", &header_format)?;

        let mut row_index = 3;
        for row in &bundle.rows {
            worksheet.write_string(row_index, 0, &row.description)?;
            worksheet.write_string(row_index, 1, &row.task_name)?;
            worksheet.write_string(row_index, 2, &row.date)?;
            worksheet.write_string(row_index, 3, &row.duration)?;
            row_index += 1;
        }

        worksheet.write_string_with_format(row_index, 0, "Gesamtaufwand", &header_format)?;
        worksheet.write_string_with_format(row_index, 3, format!("{} h", format_hours(bundle.total_hours)), &header_format)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
