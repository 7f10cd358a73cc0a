//! Record export to a PDF table.
//!
//! The page hands a `TableDocument` (title, fixed header, rows in record
//! order) to a `DocumentRenderer`. `PdfTableRenderer` lays it out with
//! `printpdf`. Built-in Helvetica only encodes WinAnsi text, so Japanese
//! and Chinese cells need an external font from `ExportSettings`. A table
//! the chosen font cannot draw is refused instead of written with blanks.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::lopdf;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::*;
use serde::Serialize;
use thiserror::Error;

use crate::config::{ExportSettings, FONT_ENV_VAR};

pub const COLUMN_COUNT: usize = 4;

/// Fixed export header: date, time, symptom, medicine.
pub const EXPORT_HEADER: [&str; COLUMN_COUNT] = ["日付", "時間", "症状", "薬"];

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF font error: {0}")]
    Font(String),

    #[error("PDF render error: {0}")]
    Render(String),

    #[error("Cannot write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Table handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDocument {
    pub title: String,
    pub header: [String; COLUMN_COUNT],
    pub rows: Vec<[String; COLUMN_COUNT]>,
}

impl TableDocument {
    /// Every string drawn, in drawing order.
    fn texts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.title.as_str())
            .chain(self.header.iter().map(String::as_str))
            .chain(self.rows.iter().flatten().map(String::as_str))
    }
}

/// Turns a table into the bytes of a downloadable document.
pub trait DocumentRenderer {
    fn render(&self, table: &TableDocument) -> Result<Vec<u8>, ExportError>;
}

// ─── PDF layout ───────────────────────────────────────────────────────────────

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const SIDE_MARGIN: f32 = 14.0;
const BOTTOM_MARGIN: f32 = 14.0;
const TITLE_X: f32 = 10.0;
const TITLE_TOP: f32 = 10.0;
/// Distance from the page top to the table on the first page.
const TABLE_TOP: f32 = 20.0;
const CELL_PADDING: f32 = 1.76;
const PT_TO_MM: f32 = 0.352_778;
const LINE_SPACING: f32 = 1.15;

/// Share of the table width per column.
const COLUMN_RATIOS: [f32; COLUMN_COUNT] = [0.16, 0.12, 0.44, 0.28];

/// A row after wrapping: lines per cell and the resulting height in mm.
#[derive(Debug, Clone)]
struct LaidOutRow {
    cells: [Vec<String>; COLUMN_COUNT],
    height: f32,
}

/// `printpdf` implementation: A4 portrait, title line, grid table with a
/// shaded header repeated on every page.
#[derive(Debug, Clone)]
pub struct PdfTableRenderer {
    settings: ExportSettings,
}

impl PdfTableRenderer {
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    fn column_widths() -> [f32; COLUMN_COUNT] {
        let table_width = PAGE_WIDTH - 2.0 * SIDE_MARGIN;
        COLUMN_RATIOS.map(|r| r * table_width)
    }

    fn line_height(&self) -> f32 {
        self.settings.font_size * PT_TO_MM * LINE_SPACING
    }

    fn lay_out(&self, cells: &[String; COLUMN_COUNT]) -> LaidOutRow {
        let widths = Self::column_widths();
        let wrapped: [Vec<String>; COLUMN_COUNT] = std::array::from_fn(|i| {
            wrap_cell(&cells[i], widths[i] - 2.0 * CELL_PADDING, self.settings.font_size)
        });
        let max_lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        LaidOutRow {
            cells: wrapped,
            height: max_lines as f32 * self.line_height() + 2.0 * CELL_PADDING,
        }
    }

    /// Splits body rows into pages. Each page starts with the header; a
    /// row that does not fit moves to the next page.
    fn paginate(&self, header_height: f32, row_heights: &[f32]) -> Vec<Vec<usize>> {
        let mut pages = vec![Vec::new()];
        let mut y = PAGE_HEIGHT - TABLE_TOP - header_height;

        for (index, &height) in row_heights.iter().enumerate() {
            let page_has_rows = pages.last().is_some_and(|p| !p.is_empty());
            if y - height < BOTTOM_MARGIN && page_has_rows {
                pages.push(Vec::new());
                y = PAGE_HEIGHT - SIDE_MARGIN - header_height;
            }
            if let Some(page) = pages.last_mut() {
                page.push(index);
            }
            y -= height;
        }
        pages
    }

    /// Opens the configured font and checks it can draw every character
    /// of `table`.
    fn load_font(&self, table: &TableDocument) -> Result<FontSource, ExportError> {
        let font = FontSource::open(self.settings.font_path.as_deref())?;
        let missing = font.missing_glyphs(table)?;
        if missing.is_empty() {
            return Ok(font);
        }

        tracing::warn!(font = font.name(), missing = missing.len(), "Export font lacks glyphs");
        let sample: String = missing.iter().take(12).collect();
        Err(ExportError::Font(format!(
            "{} cannot draw \"{sample}\"; set font_path or {FONT_ENV_VAR} to a Japanese/Chinese TrueType font",
            font.name()
        )))
    }

    /// Draws one row with its top edge at `top`.
    fn draw_row(
        &self,
        layer: &PdfLayerReference,
        font: &IndirectFontRef,
        row: &LaidOutRow,
        top: f32,
        is_header: bool,
    ) {
        let widths = Self::column_widths();
        let bottom = top - row.height;
        let font_size = self.settings.font_size;

        if is_header {
            let [r, g, b] = self.settings.header_fill;
            layer.set_fill_color(rgb(r, g, b));
            layer.add_polygon(Polygon {
                rings: vec![rect_points(SIDE_MARGIN, bottom, PAGE_WIDTH - SIDE_MARGIN, top)],
                mode: PaintMode::Fill,
                winding_order: WindingOrder::NonZero,
            });
            layer.set_fill_color(gray(self.settings.header_text_gray));
        } else {
            layer.set_fill_color(gray(0));
        }

        layer.set_outline_color(gray(200));
        layer.set_outline_thickness(0.5);

        let mut x = SIDE_MARGIN;
        for (lines, width) in row.cells.iter().zip(widths) {
            layer.add_line(Line {
                points: rect_points(x, bottom, x + width, top),
                is_closed: true,
            });

            // First baseline sits one ascent below the padded top edge.
            let mut baseline = top - CELL_PADDING - font_size * PT_TO_MM * 0.85;
            for line in lines {
                layer.use_text(line.as_str(), font_size, Mm(x + CELL_PADDING), Mm(baseline), font);
                baseline -= self.line_height();
            }
            x += width;
        }
    }
}

impl DocumentRenderer for PdfTableRenderer {
    fn render(&self, table: &TableDocument) -> Result<Vec<u8>, ExportError> {
        let source = self.load_font(table)?;
        let (doc, page1, layer1) =
            PdfDocument::new(&table.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let font = source.add_to(&doc)?;

        let header = self.lay_out(&table.header);
        let rows: Vec<LaidOutRow> = table.rows.iter().map(|r| self.lay_out(r)).collect();
        let heights: Vec<f32> = rows.iter().map(|r| r.height).collect();
        let pages = self.paginate(header.height, &heights);

        for (page_no, indices) in pages.iter().enumerate() {
            let (layer, mut y) = if page_no == 0 {
                let layer = doc.get_page(page1).get_layer(layer1);
                layer.set_fill_color(gray(0));
                layer.use_text(
                    table.title.as_str(),
                    self.settings.title_font_size,
                    Mm(TITLE_X),
                    Mm(PAGE_HEIGHT - TITLE_TOP),
                    &font,
                );
                (layer, PAGE_HEIGHT - TABLE_TOP)
            } else {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                (doc.get_page(page).get_layer(layer), PAGE_HEIGHT - SIDE_MARGIN)
            };

            self.draw_row(&layer, &font, &header, y, true);
            y -= header.height;
            for &index in indices {
                self.draw_row(&layer, &font, &rows[index], y, false);
                y -= rows[index].height;
            }
        }

        tracing::debug!(rows = table.rows.len(), pages = pages.len(), "PDF table rendered");

        let mut buf = BufWriter::new(Vec::new());
        doc.save(&mut buf)
            .map_err(|e| ExportError::Render(format!("PDF save error: {e}")))?;
        buf.into_inner()
            .map_err(|e| ExportError::Render(format!("PDF buffer error: {e}")))
    }
}

/// Font used for a render: the configured file, or built-in Helvetica.
enum FontSource {
    Builtin,
    External { name: String, bytes: Vec<u8> },
}

impl FontSource {
    fn open(path: Option<&Path>) -> Result<Self, ExportError> {
        let Some(path) = path else {
            return Ok(Self::Builtin);
        };
        let bytes = std::fs::read(path)
            .map_err(|e| ExportError::Font(format!("{}: {e}", path.display())))?;
        Ok(Self::External {
            name: path.display().to_string(),
            bytes,
        })
    }

    fn name(&self) -> &str {
        match self {
            Self::Builtin => "Helvetica",
            Self::External { name, .. } => name,
        }
    }

    /// Characters of `table` the font has no glyph for, in order of first
    /// use. `printpdf` silently drops such characters.
    fn missing_glyphs(&self, table: &TableDocument) -> Result<Vec<char>, ExportError> {
        let face = match self {
            Self::Builtin => None,
            Self::External { name, bytes } => Some(
                ttf_parser::Face::parse(bytes, 0)
                    .map_err(|e| ExportError::Font(format!("{name}: {e}")))?,
            ),
        };

        let mut missing = Vec::new();
        for c in table.texts().flat_map(str::chars) {
            if c.is_control() || missing.contains(&c) {
                continue;
            }
            let covered = match &face {
                Some(face) => face.glyph_index(c).is_some(),
                None => encodes_in_win_ansi(c),
            };
            if !covered {
                missing.push(c);
            }
        }
        Ok(missing)
    }

    fn add_to(self, doc: &PdfDocumentReference) -> Result<IndirectFontRef, ExportError> {
        match self {
            Self::Builtin => doc.add_builtin_font(BuiltinFont::Helvetica),
            Self::External { bytes, .. } => doc.add_external_font(bytes.as_slice()),
        }
        .map_err(|e| ExportError::Font(e.to_string()))
    }
}

/// Built-in fonts are written with WinAnsiEncoding.
fn encodes_in_win_ansi(c: char) -> bool {
    let mut buf = [0u8; 4];
    lopdf::Document::encode_text(Some("WinAnsiEncoding"), c.encode_utf8(&mut buf)).len() == 1
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

fn gray(level: u8) -> Color {
    Color::Greyscale(Greyscale::new(f32::from(level) / 255.0, None))
}

fn rect_points(left: f32, bottom: f32, right: f32, top: f32) -> Vec<(Point, bool)> {
    vec![
        (Point::new(Mm(left), Mm(bottom)), false),
        (Point::new(Mm(right), Mm(bottom)), false),
        (Point::new(Mm(right), Mm(top)), false),
        (Point::new(Mm(left), Mm(top)), false),
    ]
}

/// Approximate advance of a glyph in ems. CJK and other non-ASCII text is
/// treated as full width.
fn glyph_width(c: char) -> f32 {
    if c.is_ascii() {
        0.55
    } else {
        1.0
    }
}

/// Character-level wrap to a cell width in mm. Text without spaces (such
/// as Japanese) breaks anywhere; explicit newlines are kept.
fn wrap_cell(text: &str, width_mm: f32, font_size: f32) -> Vec<String> {
    let max_ems = width_mm / (font_size * PT_TO_MM);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_ems = 0.0;
        for c in paragraph.chars() {
            let w = glyph_width(c);
            if current_ems + w > max_ems && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_ems = 0.0;
                if c == ' ' {
                    continue;
                }
            }
            current.push(c);
            current_ems += w;
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// ─── File output ──────────────────────────────────────────────────────────────

/// Writes document bytes into `dir` (created if needed). An existing file
/// of the same name is replaced.
pub fn export_pdf_to_file(bytes: &[u8], file_name: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Renders the records table and saves it. Returns `None` without
/// touching the disk when there are no records (`table` is `None`).
pub fn export_records(
    table: Option<TableDocument>,
    renderer: &dyn DocumentRenderer,
    settings: &ExportSettings,
    dir: &Path,
) -> Result<Option<PathBuf>, ExportError> {
    let Some(table) = table else {
        tracing::debug!("Export skipped, no records");
        return Ok(None);
    };

    let bytes = renderer.render(&table)?;
    let path = export_pdf_to_file(&bytes, &settings.file_name, dir)?;
    tracing::info!(rows = table.rows.len(), path = %path.display(), "Records exported");
    Ok(Some(path))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordsPage;
    use std::cell::RefCell;

    /// Captures the table instead of rendering it.
    #[derive(Default)]
    struct RecordingRenderer {
        seen: RefCell<Vec<TableDocument>>,
    }

    impl DocumentRenderer for RecordingRenderer {
        fn render(&self, table: &TableDocument) -> Result<Vec<u8>, ExportError> {
            self.seen.borrow_mut().push(table.clone());
            Ok(b"%PDF-fake".to_vec())
        }
    }

    fn page_with(entries: &[(&str, &str, &str, &str)]) -> RecordsPage {
        let mut page = RecordsPage::new();
        for (date, time, symptom, medicine) in entries {
            page.type_date(date);
            page.set_time(time);
            page.set_draft_field(crate::models::DraftField::Symptom, symptom);
            page.set_medicine(medicine);
            page.add_record().unwrap();
        }
        page
    }

    /// Two records entered on the page, as in the export walkthrough.
    fn two_record_page() -> RecordsPage {
        page_with(&[
            ("2024-01-05", "08:00", "鼻水", "感冒药"),
            ("2024-01-06", "09:30", "せき", ""),
        ])
    }

    /// Operands of every `Tj` operator, page by page.
    fn shown_strings(pdf: &[u8]) -> Vec<Vec<u8>> {
        let doc = lopdf::Document::load_mem(pdf).unwrap();
        let mut shown = Vec::new();
        for (_, page_id) in doc.get_pages() {
            let content = doc.get_page_content(page_id).unwrap();
            let ops = lopdf::content::Content::decode(&content).unwrap().operations;
            for op in ops.into_iter().filter(|op| op.operator == "Tj") {
                if let Some(lopdf::Object::String(bytes, _)) = op.operands.first() {
                    shown.push(bytes.clone());
                }
            }
        }
        shown
    }

    fn ascii_table() -> TableDocument {
        TableDocument {
            title: "Sick log".into(),
            header: ["Date", "Time", "Symptom", "Medicine"].map(String::from),
            rows: vec![
                ["2024-01-05", "08:00", "runny nose", "cold medicine"].map(String::from),
                ["2024-01-06", "09:30", "cough", ""].map(String::from),
            ],
        }
    }

    fn table(rows: usize) -> TableDocument {
        TableDocument {
            title: "こどもの通院記録（孩子看病记录）".into(),
            header: EXPORT_HEADER.map(String::from),
            rows: (0..rows)
                .map(|i| {
                    [
                        format!("2024-01-{:02}", i % 28 + 1),
                        "08:00".into(),
                        "熱（最高体温 38.5℃）, 鼻水".into(),
                        "感冒药".into(),
                    ]
                })
                .collect(),
        }
    }

    #[test]
    fn export_hands_rows_in_record_order() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = ExportSettings::default();
        let table = two_record_page().export_table(&settings.title);
        let renderer = RecordingRenderer::default();

        let path = export_records(table, &renderer, &settings, tmp.path())
            .unwrap()
            .unwrap();

        let seen = renderer.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].header, ["日付", "時間", "症状", "薬"].map(String::from));
        assert_eq!(seen[0].rows[0][0], "2024-01-05");
        assert_eq!(seen[0].rows[1], ["2024-01-06", "09:30", "せき", ""].map(String::from));
        assert!(path.ends_with("records.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-fake");
    }

    #[test]
    fn export_of_empty_page_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("exports");
        let renderer = RecordingRenderer::default();

        let table = RecordsPage::new().export_table("title");
        let result = export_records(table, &renderer, &ExportSettings::default(), &out).unwrap();

        assert!(result.is_none());
        assert!(renderer.seen.borrow().is_empty());
        assert!(!out.exists());
    }

    #[test]
    fn pdf_generation_produces_pdf_bytes() {
        let renderer = PdfTableRenderer::new(ExportSettings::default());
        let bytes = renderer.render(&ascii_table()).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(&bytes[0..4], b"%PDF");
    }

    #[test]
    fn pdf_text_follows_record_order() {
        let renderer = PdfTableRenderer::new(ExportSettings::default());
        let bytes = renderer.render(&ascii_table()).unwrap();

        let shown: Vec<String> = shown_strings(&bytes)
            .into_iter()
            .map(|s| String::from_utf8(s).unwrap())
            .collect();
        assert_eq!(
            shown,
            [
                "Sick log", "Date", "Time", "Symptom", "Medicine",
                "2024-01-05", "08:00", "runny nose", "cold medicine",
                "2024-01-06", "09:30", "cough", "",
            ]
        );
    }

    #[test]
    fn pdf_generation_with_many_rows_repeats_header() {
        let mut table = ascii_table();
        table.rows = (0..150)
            .map(|i| {
                [
                    format!("2024-01-{:02}", i % 28 + 1),
                    "08:00".into(),
                    "fever".into(),
                    String::new(),
                ]
            })
            .collect();
        let bytes = PdfTableRenderer::new(ExportSettings::default())
            .render(&table)
            .unwrap();

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages().len();
        assert!(pages > 1);
        let headers = shown_strings(&bytes)
            .iter()
            .filter(|s| s.as_slice() == b"Medicine")
            .count();
        assert_eq!(headers, pages);
    }

    #[test]
    fn builtin_font_refuses_japanese_table() {
        let settings = ExportSettings::default();
        let table = two_record_page().export_table(&settings.title).unwrap();

        let err = PdfTableRenderer::new(settings).render(&table).unwrap_err();
        let msg = match err {
            ExportError::Font(msg) => msg,
            other => panic!("expected font error, got {other:?}"),
        };
        assert!(msg.contains("Helvetica"));
        assert!(msg.contains('こ'));
        assert!(msg.contains(FONT_ENV_VAR));
    }

    #[test]
    fn refused_table_writes_no_file() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = ExportSettings::default();
        let renderer = PdfTableRenderer::new(settings.clone());

        let table = two_record_page().export_table(&settings.title);
        let result = export_records(table, &renderer, &settings, tmp.path());

        assert!(matches!(result, Err(ExportError::Font(_))));
        assert!(!tmp.path().join(&settings.file_name).exists());
    }

    #[test]
    fn win_ansi_coverage() {
        assert!(encodes_in_win_ansi('A'));
        assert!(encodes_in_win_ansi(' '));
        assert!(encodes_in_win_ansi('é'));
        assert!(!encodes_in_win_ansi('鼻'));
        assert!(!encodes_in_win_ansi('℃'));
    }

    #[test]
    fn unreadable_font_file_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        let settings = ExportSettings {
            font_path: Some(path),
            ..ExportSettings::default()
        };

        let err = PdfTableRenderer::new(settings).render(&ascii_table()).unwrap_err();
        assert!(matches!(err, ExportError::Font(ref msg) if msg.contains("broken.ttf")));
    }

    /// Runs when `SICKDAY_FONT` names a Japanese/Chinese TrueType font.
    #[test]
    fn configured_font_draws_every_cell_in_order() {
        let Some(path) = std::env::var_os(FONT_ENV_VAR).map(PathBuf::from) else {
            return;
        };
        let settings = ExportSettings {
            font_path: Some(path.clone()),
            ..ExportSettings::default()
        };
        let table = two_record_page().export_table(&settings.title).unwrap();
        let bytes = PdfTableRenderer::new(settings).render(&table).unwrap();

        let font = std::fs::read(&path).unwrap();
        let face = ttf_parser::Face::parse(&font, 0).unwrap();
        let glyphs = |text: &str| -> Vec<u8> {
            text.chars()
                .flat_map(|c| face.glyph_index(c).unwrap().0.to_be_bytes())
                .collect()
        };
        let expected: Vec<Vec<u8>> = [
            "こどもの通院記録（孩子看病记录）", "日付", "時間", "症状", "薬",
            "2024-01-05", "08:00", "鼻水", "感冒药",
            "2024-01-06", "09:30", "せき", "",
        ]
        .into_iter()
        .map(glyphs)
        .collect();
        assert_eq!(shown_strings(&bytes), expected);
    }

    #[test]
    fn missing_font_file_is_reported() {
        let settings = ExportSettings {
            font_path: Some(PathBuf::from("/nonexistent/NotoSansJP.ttf")),
            ..ExportSettings::default()
        };
        let err = PdfTableRenderer::new(settings).render(&table(1)).unwrap_err();
        assert!(matches!(err, ExportError::Font(ref msg) if msg.contains("NotoSansJP")));
    }

    #[test]
    fn pagination_keeps_order_and_splits_pages() {
        let renderer = PdfTableRenderer::new(ExportSettings::default());
        let heights = vec![10.0; 60];
        let pages = renderer.paginate(8.0, &heights);

        assert!(pages.len() > 1);
        let flat: Vec<usize> = pages.iter().flatten().copied().collect();
        assert_eq!(flat, (0..60).collect::<Vec<_>>());
        // First page: 297 - 20 - 8 - 14 = 255 mm for rows.
        assert_eq!(pages[0].len(), 25);
    }

    #[test]
    fn pagination_of_no_rows_is_one_page() {
        let renderer = PdfTableRenderer::new(ExportSettings::default());
        assert_eq!(renderer.paginate(8.0, &[]), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn oversized_row_still_placed() {
        let renderer = PdfTableRenderer::new(ExportSettings::default());
        let pages = renderer.paginate(8.0, &[400.0, 10.0]);
        assert_eq!(pages, vec![vec![0], vec![1]]);
    }

    #[test]
    fn long_symptom_wraps_to_several_lines() {
        let renderer = PdfTableRenderer::new(ExportSettings::default());
        let cells = [
            "2024-01-05".to_string(),
            "08:00".to_string(),
            "熱（最高体温 38.5℃）, 鼻水, せき, のどの痛み, ゼイゼイする, 耳の痛み, 目やに, 頭痛".to_string(),
            String::new(),
        ];
        let row = renderer.lay_out(&cells);
        assert!(row.cells[2].len() > 1);
        assert_eq!(row.cells[0].len(), 1);
        assert!(row.height > renderer.lay_out(&table(1).header).height);
    }

    #[test]
    fn wrap_cell_breaks_cjk_without_spaces() {
        let lines = wrap_cell("吐き気・嘔吐吐き気・嘔吐吐き気・嘔吐", 20.0, 12.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "吐き気・嘔吐吐き気・嘔吐吐き気・嘔吐");
    }

    #[test]
    fn wrap_cell_short() {
        assert_eq!(wrap_cell("08:00", 20.0, 12.0), vec!["08:00".to_string()]);
    }

    #[test]
    fn wrap_cell_empty() {
        assert_eq!(wrap_cell("", 20.0, 12.0), vec![String::new()]);
    }

    #[test]
    fn export_pdf_to_file_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("exports");
        let path = export_pdf_to_file(b"%PDF-1.4 test", "records.pdf", &dir).unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 test");
    }
}
