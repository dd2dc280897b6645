// Document renderers: GeneratedDocument text → file bytes.
// Each renderer is independent; a failure in one never affects the others.

pub mod docx;
pub mod html;
pub mod page;
pub mod pdf;

use thiserror::Error;

pub use docx::render_docx;
pub use html::render_html;
pub use page::{a4_page_geometry, PageGeometry};
pub use pdf::render_pdf;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Word document packaging failed: {0}")]
    Docx(String),

    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}

/// Splits document text into renderable lines. `n` newlines always give `n + 1` lines,
/// so blank lines and a trailing newline are preserved.
pub(crate) fn document_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
