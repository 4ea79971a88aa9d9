use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use thiserror::Error;

use crate::services::report_manifest::{ReportManifest, ReportSection};

#[derive(Error, Debug)]
pub enum ReportPdfError {
    #[error("failed to render report pdf: {0}")]
    Render(String),
}

// US Letter in points
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN_LEFT: i64 = 72;
const MARGIN_TOP: i64 = 72;
const MARGIN_BOTTOM: i64 = 54;
const VALUE_COLUMN_X: i64 = MARGIN_LEFT + 216;
const TABLE_RIGHT_X: i64 = PAGE_WIDTH - MARGIN_LEFT;

const TITLE_SIZE: i64 = 24;
const HEADING_SIZE: i64 = 16;
const TABLE_HEADER_SIZE: i64 = 12;
const BODY_SIZE: i64 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
    Symbol,
}

impl Font {
    fn resource_name(self) -> &'static [u8] {
        match self {
            Font::Regular => b"F1",
            Font::Bold => b"F2",
            Font::Symbol => b"F3",
        }
    }
}

/// Renders the manifest as a paginated PDF document.
///
/// Text outside Latin-1 (other than `∞`) is printed as `?` and long values
/// are not wrapped; the manifest keeps the exact text.
pub fn render_report_pdf(manifest: &ReportManifest) -> Result<Vec<u8>, ReportPdfError> {
    let pages = layout_pages(manifest);
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let symbol_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Symbol",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
            "F3" => symbol_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let encoded = content
            .encode()
            .map_err(|e| ReportPdfError::Render(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_count),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = add_info(&mut doc, manifest);
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ReportPdfError::Render(e.to_string()))?;
    Ok(buffer)
}

fn add_info(doc: &mut Document, manifest: &ReportManifest) -> ObjectId {
    let title = manifest
        .sections
        .first()
        .map(|section| section.title.clone())
        .unwrap_or_default();
    doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_latin1(&title)),
        "Producer" => Object::string_literal("invoice-roi"),
    })
}

/// Lays out the manifest into the content operations of each page.
fn layout_pages(manifest: &ReportManifest) -> Vec<Vec<Operation>> {
    let mut writer = PageWriter::new();
    for (index, section) in manifest.sections.iter().enumerate() {
        if index == 0 {
            write_header_section(&mut writer, section);
        } else {
            write_table_section(&mut writer, section);
        }
    }
    writer.finish()
}

fn write_header_section(writer: &mut PageWriter, section: &ReportSection) {
    writer.text_line(&section.title, Font::Bold, TITLE_SIZE, MARGIN_LEFT, 40);
    for row in &section.rows {
        let line = format!("{}: {}", row.label, row.value);
        writer.text_line(&line, Font::Regular, BODY_SIZE, MARGIN_LEFT, 16);
    }
    writer.skip(12);
}

fn write_table_section(writer: &mut PageWriter, section: &ReportSection) {
    // keep a heading together with at least its column header and one row
    writer.ensure_space(HEADING_SIZE + 24 + 18 + 18);
    writer.skip(12);
    writer.text_line(&section.title, Font::Bold, HEADING_SIZE, MARGIN_LEFT, 24);

    if let Some((left, right)) = &section.columns {
        writer.two_column_line(left, right, Font::Bold, TABLE_HEADER_SIZE, 18);
        writer.rule();
    }
    for row in &section.rows {
        let font = if row.emphasized { Font::Bold } else { Font::Regular };
        writer.two_column_line(&row.label, &row.value, font, BODY_SIZE, 18);
    }
    writer.skip(12);
}

struct PageWriter {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    cursor_y: i64,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            cursor_y: PAGE_HEIGHT - MARGIN_TOP,
        }
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
        }
        self.pages
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor_y = PAGE_HEIGHT - MARGIN_TOP;
    }

    fn ensure_space(&mut self, height: i64) {
        if self.cursor_y - height < MARGIN_BOTTOM {
            self.new_page();
        }
    }

    fn skip(&mut self, height: i64) {
        self.cursor_y -= height;
    }

    fn text_line(&mut self, text: &str, font: Font, size: i64, x: i64, advance: i64) {
        self.ensure_space(advance);
        self.cursor_y -= size;
        let y = self.cursor_y;
        self.push_text(text, font, size, x, y);
        self.cursor_y -= advance - size;
    }

    fn two_column_line(&mut self, left: &str, right: &str, font: Font, size: i64, advance: i64) {
        self.ensure_space(advance);
        self.cursor_y -= size;
        let y = self.cursor_y;
        self.push_text(left, font, size, MARGIN_LEFT, y);
        self.push_text(right, font, size, VALUE_COLUMN_X, y);
        self.cursor_y -= advance - size;
    }

    fn rule(&mut self) {
        let y = self.cursor_y + 3;
        self.current.extend([
            Operation::new("w", vec![Object::Integer(1)]),
            Operation::new("m", vec![Object::Integer(MARGIN_LEFT), Object::Integer(y)]),
            Operation::new("l", vec![Object::Integer(TABLE_RIGHT_X), Object::Integer(y)]),
            Operation::new("S", vec![]),
        ]);
    }

    fn push_text(&mut self, text: &str, font: Font, size: i64, x: i64, y: i64) {
        self.current.push(Operation::new("BT", vec![]));
        self.current.push(Operation::new(
            "Td",
            vec![Object::Integer(x), Object::Integer(y)],
        ));
        for (run_font, bytes) in text_runs(text, font) {
            self.current.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(run_font.resource_name().to_vec()),
                    Object::Integer(size),
                ],
            ));
            self.current
                .push(Operation::new("Tj", vec![Object::string_literal(bytes)]));
        }
        self.current.push(Operation::new("ET", vec![]));
    }
}

/// Splits `text` into runs per font. The standard Helvetica fonts have no
/// infinity glyph, so `∞` is drawn from the Symbol font.
fn text_runs(text: &str, font: Font) -> Vec<(Font, Vec<u8>)> {
    let mut runs: Vec<(Font, Vec<u8>)> = Vec::new();
    for ch in text.chars() {
        let (run_font, byte) = if ch == '∞' {
            // infinity in the Symbol font's built-in encoding
            (Font::Symbol, 0xA5)
        } else {
            (font, latin1_byte(ch))
        };
        if let Some((last_font, bytes)) = runs.last_mut() {
            if *last_font == run_font {
                bytes.push(byte);
                continue;
            }
        }
        runs.push((run_font, vec![byte]));
    }
    runs
}

fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars().map(latin1_byte).collect()
}

fn latin1_byte(ch: char) -> u8 {
    match u32::from(ch) {
        code @ 0x20..=0x7E | code @ 0xA0..=0xFF => code as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::report_manifest::{build_report_manifest, ReportRow};
    use crate::test_support::{report_date, result_named};

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    #[test]
    fn render_report_pdf_produces_pdf_document() {
        let manifest = build_report_manifest(&result_named("Pilot"), "a@b.com", report_date());
        let pdf = render_report_pdf(&manifest).unwrap();

        assert!(pdf.starts_with(b"%PDF-1.5"));
        assert!(contains(&pdf, b"Key Results"));
        assert!(contains(&pdf, b"Net Monthly Savings"));
        assert!(contains(&pdf, b"a@b.com"));
    }

    #[test]
    fn short_report_fits_on_one_page() {
        let manifest = build_report_manifest(&result_named("Pilot"), "a@b.com", report_date());
        assert_eq!(layout_pages(&manifest).len(), 1);
    }

    #[test]
    fn long_sections_continue_on_new_pages() {
        let mut manifest = build_report_manifest(&result_named("Pilot"), "a@b.com", report_date());
        let rows: Vec<ReportRow> = (0..80)
            .map(|index| ReportRow {
                label: format!("Row {index}"),
                value: "$1.00".to_string(),
                emphasized: false,
            })
            .collect();
        manifest.sections[2].rows = rows;

        assert!(layout_pages(&manifest).len() >= 2);
        assert!(render_report_pdf(&manifest).is_ok());
    }

    #[test]
    fn text_runs_switch_to_symbol_font_for_infinity() {
        let runs = text_runs("∞ months", Font::Regular);
        assert_eq!(
            runs,
            vec![
                (Font::Symbol, vec![0xA5]),
                (Font::Regular, b" months".to_vec()),
            ]
        );
    }

    #[test]
    fn text_runs_replace_unencodable_characters() {
        let runs = text_runs("Café – 1", Font::Bold);
        assert_eq!(runs, vec![(Font::Bold, b"Caf\xE9 ? 1".to_vec())]);
    }
}
