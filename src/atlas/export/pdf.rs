//! Minimal PDF 1.4 writer for the paginated report.
//!
//! Emits a fixed object layout: catalog, page tree, one Helvetica font, then a
//! page object and an uncompressed content stream per page. Object numbering,
//! stream contents and the xref table depend only on the input pages, which
//! keeps the output byte-stable. Text is WinAnsi-encoded; characters outside
//! that range are replaced with `?`.

use super::{Page, LEFT_MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::error::{AtlasError, Result};
use std::io::Write;

const MM_TO_PT: f64 = 72.0 / 25.4;

fn pt(mm: f64) -> String {
    format!("{:.2}", mm * MM_TO_PT)
}

/// Escape text for a PDF string literal and map it to WinAnsi bytes.
fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            // WinAnsi agrees with Latin-1 on every character the catalog data
            // actually uses; anything beyond U+00FF is not encodable.
            _ if (c as u32) <= 0xFF => out.push(c as u8),
            _ => out.push(b'?'),
        }
    }
    out
}

fn content_stream(page: &Page) -> Vec<u8> {
    let x = pt(LEFT_MARGIN_MM);
    let mut stream = Vec::new();
    for line in &page.lines {
        // PDF origin is bottom-left; the layout cursor is top-down.
        let y = pt(PAGE_HEIGHT_MM - line.y_mm);
        stream
            .extend_from_slice(format!("BT /F1 {} Tf {} {} Td (", line.font_size, x, y).as_bytes());
        stream.extend_from_slice(&encode_text(&line.text));
        stream.extend_from_slice(b") Tj ET\n");
    }
    stream
}

struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Self {
        Self {
            buf: b"%PDF-1.4\n".to_vec(),
            offsets: Vec::new(),
        }
    }

    fn begin(&mut self, id: usize) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.buf.len());
        self.buf.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
    }

    fn end(&mut self) {
        self.buf.extend_from_slice(b"endobj\n");
    }

    fn dict(&mut self, id: usize, body: &str) {
        self.begin(id);
        self.buf.extend_from_slice(body.as_bytes());
        self.buf.push(b'\n');
        self.end();
    }

    fn stream(&mut self, id: usize, data: &[u8]) {
        self.begin(id);
        self.buf
            .extend_from_slice(format!("<< /Length {} >>\nstream\n", data.len()).as_bytes());
        self.buf.extend_from_slice(data);
        self.buf.extend_from_slice(b"endstream\n");
        self.end();
    }

    fn finish(mut self) -> Vec<u8> {
        let count = self.offsets.len();
        let xref_offset = self.buf.len();
        self.buf
            .extend_from_slice(format!("xref\n0 {}\n", count + 1).as_bytes());
        self.buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            self.buf
                .extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        self.buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                count + 1,
                xref_offset
            )
            .as_bytes(),
        );
        self.buf
    }
}

/// Serialize placed pages into a complete PDF document.
pub fn write_document<W: Write>(mut writer: W, pages: &[Page]) -> Result<()> {
    // Pages sit at objects 4, 6, 8, …; their content streams follow at 5, 7, 9, …
    let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", 4 + 2 * i)).collect();
    let media_box = format!("[0 0 {} {}]", pt(PAGE_WIDTH_MM), pt(PAGE_HEIGHT_MM));

    let mut out = ObjectWriter::new();
    out.dict(1, "<< /Type /Catalog /Pages 2 0 R >>");
    out.dict(
        2,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
    );
    out.dict(
        3,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );

    for (i, page) in pages.iter().enumerate() {
        let page_id = 4 + 2 * i;
        out.dict(
            page_id,
            &format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox {} /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                media_box,
                page_id + 1
            ),
        );
        out.stream(page_id + 1, &content_stream(page));
    }

    writer.write_all(&out.finish()).map_err(AtlasError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PlacedLine;

    fn page_with(text: &str) -> Page {
        Page {
            lines: vec![PlacedLine {
                text: text.to_string(),
                font_size: 12,
                y_mm: 10.0,
            }],
        }
    }

    fn written(pages: &[Page]) -> Vec<u8> {
        let mut buf = Vec::new();
        write_document(&mut buf, pages).unwrap();
        buf
    }

    #[test]
    fn document_declares_its_page_count() {
        let bytes = written(&[page_with("a"), page_with("b")]);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("[4 0 R 6 0 R]"));
    }

    #[test]
    fn text_operators_carry_font_size_and_position() {
        let bytes = written(&[page_with("Tokyo")]);
        let text = String::from_utf8_lossy(&bytes);
        // 10mm left margin = 28.35pt, line at 10mm from top = 813.54pt up.
        assert!(text.contains("BT /F1 12 Tf 28.35 813.54 Td (Tokyo) Tj ET"));
    }

    #[test]
    fn parentheses_and_backslashes_are_escaped() {
        assert_eq!(encode_text(r"a(b)c\d"), b"a\\(b\\)c\\\\d".to_vec());
    }

    #[test]
    fn latin1_text_maps_to_single_bytes() {
        assert_eq!(encode_text("Côte d'Ivoire")[1], 0xF4);
    }

    #[test]
    fn unencodable_characters_become_question_marks() {
        assert_eq!(encode_text("東京"), b"??".to_vec());
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let bytes = written(&[page_with("x")]);
        let text = String::from_utf8_lossy(&bytes);
        let xref_pos = text.find("xref\n").unwrap();
        for entry in text[xref_pos..]
            .lines()
            .skip(3)
            .take_while(|l| l.ends_with("n "))
        {
            let offset: usize = entry.split(' ').next().unwrap().parse().unwrap();
            assert!(text[offset..].contains("0 obj"));
            assert!(offset < xref_pos);
        }
    }

    #[test]
    fn identical_pages_produce_identical_bytes() {
        let pages = vec![page_with("same")];
        assert_eq!(written(&pages), written(&pages));
    }
}
