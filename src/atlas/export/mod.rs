//! Paginated PDF export of the document list.
//!
//! Split into two halves: [`paginate`] computes a pure fixed-layout placement
//! of text lines on A4 pages, and [`pdf`] serializes those pages into a
//! minimal PDF. Both halves are deterministic—no timestamps, no ids—so the
//! output bytes are stable for identical input and can be golden-tested.

use crate::error::Result;
use crate::model::{Country, NOT_AVAILABLE};
use std::io::Write;

pub mod pdf;

// Layout constants, millimetres on an A4 page.
pub const LEFT_MARGIN_MM: f64 = 10.0;
pub const TOP_MARGIN_MM: f64 = 10.0;
pub const LINE_HEIGHT_MM: f64 = 10.0;
pub const PAGE_BOTTOM_MM: f64 = 270.0;
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

// Font sizes in points.
pub const TITLE_SIZE: u8 = 20;
pub const NAME_SIZE: u8 = 16;
pub const DETAIL_SIZE: u8 = 12;

pub const REPORT_TITLE: &str = "Document List";
pub const EMPTY_MESSAGE: &str = "No countries added to document list.";
pub const DEFAULT_FILENAME: &str = "document_list.pdf";

/// One text line placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub font_size: u8,
    pub y_mm: f64,
}

#[derive(Debug, Default, Clone)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

struct Layout {
    done: Vec<Page>,
    current: Page,
    cursor: f64,
}

impl Layout {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Page::default(),
            cursor: TOP_MARGIN_MM,
        }
    }

    /// Emit one line at the cursor, breaking to a new page first if the cursor
    /// has run past the bottom threshold. The check runs per line, so a single
    /// record's detail block can span a page boundary.
    fn emit(&mut self, text: String, font_size: u8) {
        if self.cursor > PAGE_BOTTOM_MM {
            self.done.push(std::mem::take(&mut self.current));
            self.cursor = TOP_MARGIN_MM;
        }
        self.current.lines.push(PlacedLine {
            text,
            font_size,
            y_mm: self.cursor,
        });
        self.cursor += LINE_HEIGHT_MM;
    }

    /// Advance the cursor without emitting. A gap at the end of a page never
    /// forces a page by itself; the next line's check does.
    fn gap(&mut self) {
        self.cursor += LINE_HEIGHT_MM;
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }
}

/// The fixed ordered label/value detail lines for one record, shared by the
/// report and the terminal detail view. The Timezones line is omitted entirely
/// when the record has none; Borders falls back to the literal "None".
pub fn detail_lines(country: &Country) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Capital: {}",
            country.capital.as_deref().unwrap_or(NOT_AVAILABLE)
        ),
        format!("Region: {}", country.region),
        format!(
            "Subregion: {}",
            country.subregion.as_deref().unwrap_or(NOT_AVAILABLE)
        ),
        format!("Country Code: {}", country.cca3),
        format!("Population: {}", country.population_display()),
        format!("Languages: {}", country.languages_joined()),
    ];
    if let Some(timezones) = &country.timezones {
        lines.push(format!("Timezones: {}", timezones.join(", ")));
    }
    lines.push(format!(
        "Borders: {}",
        country
            .borders
            .as_ref()
            .map(|b| b.join(", "))
            .unwrap_or_else(|| "None".to_string())
    ));
    lines
}

/// Lay the document list out on fixed-size pages: report title first, then per
/// record a name line, its detail lines, and one line of gap.
pub fn paginate(records: &[Country]) -> Vec<Page> {
    let mut layout = Layout::new();
    layout.emit(REPORT_TITLE.to_string(), TITLE_SIZE);

    if records.is_empty() {
        layout.emit(EMPTY_MESSAGE.to_string(), DETAIL_SIZE);
        return layout.finish();
    }

    for country in records {
        layout.emit(country.name.clone(), NAME_SIZE);
        for line in detail_lines(country) {
            layout.emit(line, DETAIL_SIZE);
        }
        layout.gap();
    }
    layout.finish()
}

/// Render the document list as a PDF byte stream.
pub fn render<W: Write>(writer: W, records: &[Country]) -> Result<()> {
    pdf::write_document(writer, &paginate(records))
}
