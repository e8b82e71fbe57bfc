//! PDF rendering of a finalized [`ReportBundle`].
//!
//! Consumes the assembler output and nothing else: ordered display rows, the
//! total, the month-range label, plus company name and an optional logo. A
//! missing or unreadable logo degrades to a blank header cell and never fails
//! the report.

use crate::libs::report::{format_hours, ReportBundle};
use anyhow::Result;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const REPORT_TITLE_PREFIX: &str = "Stundenaufstellung";
const TOTAL_LABEL: &str = "Gesamtaufwand:";
const TABLE_HEADERS: [&str; 4] = ["Beschreibung", "Aufgabe", "Datum", "Dauer"];

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 18.0;
const MARGIN_RIGHT: f32 = 10.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 10.0;

const COLUMN_WIDTHS: [f32; 4] = [55.0, 40.0, 40.0, 40.0];
const LOGO_WIDTH: f32 = 25.0;

const COMPANY_SIZE: f32 = 14.0;
const TITLE_SIZE: f32 = 12.0;
const HEADER_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 9.0;

const LINE_HEIGHT: f32 = 4.2;
const CELL_PADDING: f32 = 1.6;
// Room the description column offers at BODY_SIZE before wrapping.
const DESCRIPTION_CHARS: usize = 32;

/// Renders report bundles to PDF for one configured company identity.
pub struct PdfRenderer {
    company_name: String,
    logo_path: Option<PathBuf>,
}

struct PageFonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfRenderer {
    pub fn new(company_name: &str, logo_path: Option<PathBuf>) -> Self {
        Self {
            company_name: company_name.to_string(),
            logo_path,
        }
    }

    /// Renders the bundle and writes the PDF to `path`.
    pub fn render_to_file(&self, bundle: &ReportBundle, path: &Path) -> Result<()> {
        fs::write(path, self.render_to_bytes(bundle)?)?;
        Ok(())
    }

    /// Renders the bundle into an in-memory PDF document.
    pub fn render_to_bytes(&self, bundle: &ReportBundle) -> Result<Vec<u8>> {
        let title = format!("{} {}", REPORT_TITLE_PREFIX, bundle.months_label);
        let (doc, page, layer) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let fonts = PageFonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        };

        let mut layer = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT - MARGIN_TOP - 8.0;

        // Header: company name left, logo right (blank cell if unavailable).
        layer.use_text(&self.company_name, COMPANY_SIZE, Mm(MARGIN_LEFT), Mm(y), &fonts.bold);
        self.embed_logo(&layer);
        y -= 16.0;

        layer.use_text(&title, TITLE_SIZE, Mm(MARGIN_LEFT), Mm(y), &fonts.bold);
        y -= 12.0;

        let mut table_top = y;
        draw_header_row(&layer, &fonts, &mut y);

        for row in &bundle.rows {
            let lines = wrap_text(&row.description, DESCRIPTION_CHARS);
            let row_height = lines.len() as f32 * LINE_HEIGHT + 2.0 * CELL_PADDING;

            if y - row_height < MARGIN_BOTTOM {
                close_table(&layer, table_top, y);
                let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                layer = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT - MARGIN_TOP - 8.0;
                table_top = y;
                draw_header_row(&layer, &fonts, &mut y);
            }

            let mut line_y = y - CELL_PADDING - 3.0;
            for line in &lines {
                layer.use_text(line, BODY_SIZE, Mm(column_left(0) + CELL_PADDING), Mm(line_y), &fonts.regular);
                line_y -= LINE_HEIGHT;
            }
            layer.use_text(&row.task_name, BODY_SIZE, Mm(column_left(1) + CELL_PADDING), Mm(y - CELL_PADDING - 3.0), &fonts.regular);
            draw_centered(&layer, &fonts.regular, &row.date, BODY_SIZE, 2, y);
            draw_centered(&layer, &fonts.regular, &row.duration, BODY_SIZE, 3, y);

            y -= row_height;
            draw_rule(&layer, y);
        }

        // Total row, kept on one page with its own header if it has to move.
        let total_height = LINE_HEIGHT + 2.0 * CELL_PADDING;
        if y - total_height < MARGIN_BOTTOM {
            close_table(&layer, table_top, y);
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - MARGIN_TOP - 8.0;
            table_top = y;
            draw_header_row(&layer, &fonts, &mut y);
        }
        layer.use_text(TOTAL_LABEL, HEADER_SIZE, Mm(column_left(0) + CELL_PADDING), Mm(y - CELL_PADDING - 3.0), &fonts.bold);
        let total = format!("{} h", format_hours(bundle.total_hours));
        draw_centered(&layer, &fonts.bold, &total, HEADER_SIZE, 3, y);
        y -= total_height;
        draw_rule(&layer, y);
        close_table(&layer, table_top, y);

        Ok(doc.save_to_bytes()?)
    }

    fn embed_logo(&self, layer: &PdfLayerReference) {
        let Some(path) = &self.logo_path else { return };
        match load_logo(path) {
            Ok(image) => {
                let px_width = image.image.width.0.max(1) as f32;
                let px_height = image.image.height.0.max(1) as f32;
                // Scale to LOGO_WIDTH by choosing the dpi accordingly.
                let dpi = px_width / (LOGO_WIDTH / 25.4);
                let height = LOGO_WIDTH * px_height / px_width;
                image.add_to_layer(
                    layer.clone(),
                    ImageTransform {
                        translate_x: Some(Mm(PAGE_WIDTH - MARGIN_RIGHT - LOGO_WIDTH)),
                        translate_y: Some(Mm(PAGE_HEIGHT - MARGIN_TOP - height)),
                        dpi: Some(dpi),
                        ..Default::default()
                    },
                );
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "logo could not be loaded, leaving header cell blank");
            }
        }
    }
}

fn load_logo(path: &Path) -> Result<Image> {
    let file = File::open(path)?;
    let decoder = PngDecoder::new(file)?;
    Ok(Image::try_from(decoder)?)
}

fn column_left(index: usize) -> f32 {
    MARGIN_LEFT + COLUMN_WIDTHS[..index].iter().sum::<f32>()
}

fn table_right() -> f32 {
    MARGIN_LEFT + COLUMN_WIDTHS.iter().sum::<f32>()
}

fn draw_header_row(layer: &PdfLayerReference, fonts: &PageFonts, y: &mut f32) {
    draw_rule(layer, *y);
    layer.use_text(TABLE_HEADERS[0], HEADER_SIZE, Mm(column_left(0) + CELL_PADDING), Mm(*y - CELL_PADDING - 3.0), &fonts.bold);
    for column in 1..4 {
        draw_centered(layer, &fonts.bold, TABLE_HEADERS[column], HEADER_SIZE, column, *y);
    }
    *y -= LINE_HEIGHT + 2.0 * CELL_PADDING;
    draw_rule(layer, *y);
}

/// Horizontal rule across the table at height `y`.
fn draw_rule(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_thickness(0.2);
    layer.set_outline_color(Color::Rgb(Rgb::new(0.33, 0.33, 0.33, None)));
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT), Mm(y)), false),
            (Point::new(Mm(table_right()), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// Vertical column borders for the table span ending at `bottom`.
fn close_table(layer: &PdfLayerReference, top: f32, bottom: f32) {
    layer.set_outline_thickness(0.2);
    layer.set_outline_color(Color::Rgb(Rgb::new(0.33, 0.33, 0.33, None)));
    for column in 0..=COLUMN_WIDTHS.len() {
        let x = if column == COLUMN_WIDTHS.len() { table_right() } else { column_left(column) };
        layer.add_line(Line {
            points: vec![(Point::new(Mm(x), Mm(top)), false), (Point::new(Mm(x), Mm(bottom)), false)],
            is_closed: false,
        });
    }
}

/// Approximate centering based on the average Helvetica glyph width.
fn draw_centered(layer: &PdfLayerReference, font: &IndirectFontRef, text: &str, size: f32, column: usize, y: f32) {
    let text_width = text.chars().count() as f32 * size * 0.5 * 0.3528;
    let x = column_left(column) + ((COLUMN_WIDTHS[column] - text_width) / 2.0).max(CELL_PADDING);
    layer.use_text(text, size, Mm(x), Mm(y - CELL_PADDING - 3.0), font);
}

/// Greedy word wrap; words longer than the line limit are hard-split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split_at = word.char_indices().nth(max_chars).map(|(i, _)| i).unwrap_or(word.len());
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
        }
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
