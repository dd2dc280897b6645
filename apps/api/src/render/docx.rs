//! Word renderer: one unstyled paragraph per text line.

use std::borrow::Cow;
use std::io::Cursor;

use bytes::Bytes;
use docx_rs::{Docx, Paragraph, Run};

use crate::render::{document_lines, RenderError};

/// Builds the in-memory document. Blank lines become empty paragraphs with no run.
fn build_docx(text: &str) -> Docx {
    document_lines(text)
        .into_iter()
        .fold(Docx::new(), |docx, line| {
            let paragraph = if line.is_empty() {
                Paragraph::new()
            } else {
                Paragraph::new().add_run(Run::new().add_text(xml_safe_text(line)))
            };
            docx.add_paragraph(paragraph)
        })
}

/// Renders `text` (split on `'\n'`) as a `.docx` package.
pub fn render_docx(text: &str) -> Result<Bytes, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    build_docx(text)
        .build()
        .pack(&mut buffer)
        .map_err(|e| RenderError::Docx(e.to_string()))?;
    Ok(Bytes::from(buffer.into_inner()))
}

/// Replaces characters XML 1.0 cannot carry (C0 controls other than tab, newline and
/// carriage return, plus U+FFFE/U+FFFF) with `?`.
fn xml_safe_text(line: &str) -> Cow<'_, str> {
    fn forbidden(c: char) -> bool {
        matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}')
    }

    if !line.chars().any(forbidden) {
        return Cow::Borrowed(line);
    }
    Cow::Owned(
        line.chars()
            .map(|c| if forbidden(c) { '?' } else { c })
            .collect(),
    )
}
