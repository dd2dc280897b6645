//! Export Dispatcher: picks the synthesizer and renderers for a document kind and
//! returns the rendered artifacts.
//!
//! The dispatcher never classifies; it receives an already-predicted label. Renderers run
//! independently: a failed renderer is recorded in `ExportBundle::failures` and the
//! remaining artifacts are still produced.

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::classify::PredictedLabel;
use crate::render::{render_docx, render_html, render_pdf, PageGeometry, RenderError};
use crate::synthesis::{
    build_cover_letter, build_customized_resume, build_portfolio, build_portfolio_website,
    DocumentKind, GeneratedDocument,
};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Docx,
    Pdf,
    Html,
}

impl ArtifactFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Docx => "docx",
            ArtifactFormat::Pdf => "pdf",
            ArtifactFormat::Html => "html",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            ArtifactFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ArtifactFormat::Pdf => "application/pdf",
            ArtifactFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Artifact formats produced for each document kind, in delivery order.
    pub fn for_kind(kind: DocumentKind) -> &'static [ArtifactFormat] {
        match kind {
            DocumentKind::Resume | DocumentKind::CoverLetter => {
                &[ArtifactFormat::Docx, ArtifactFormat::Pdf]
            }
            DocumentKind::Portfolio => &[
                ArtifactFormat::Docx,
                ArtifactFormat::Pdf,
                ArtifactFormat::Html,
            ],
        }
    }

    /// Fixed filename, e.g. `cover_letter.pdf`. Never derived from the label.
    pub fn filename(self, kind: DocumentKind) -> String {
        format!("{}.{}", kind.file_stem(), self.extension())
    }
}

/// One rendered output file.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub filename: String,
    pub media_type: &'static str,
    pub bytes: Bytes,
}

/// A renderer that failed; only its own artifact is missing.
#[derive(Debug, Clone, Serialize)]
pub struct RenderFailure {
    pub filename: String,
    pub message: String,
}

/// Dispatcher output: the document text shown to the user plus its files.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub document: GeneratedDocument,
    pub artifacts: Vec<ExportArtifact>,
    pub failures: Vec<RenderFailure>,
}

impl ExportBundle {
    pub fn artifact(&self, filename: &str) -> Option<&ExportArtifact> {
        self.artifacts.iter().find(|a| a.filename == filename)
    }

    pub fn failure(&self, filename: &str) -> Option<&RenderFailure> {
        self.failures.iter().find(|f| f.filename == filename)
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub page: PageGeometry,
    /// HTML-escape candidate text and label in the portfolio website.
    pub escape_html: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Synthesizes the document for `kind` and renders every artifact for it.
///
/// The portfolio website is built from the candidate's raw text, not from the
/// portfolio profile text.
pub fn dispatch(
    kind: DocumentKind,
    label: &PredictedLabel,
    raw_text: &str,
    job_description: &str,
    options: &ExportOptions,
) -> ExportBundle {
    let document = match kind {
        DocumentKind::Resume => build_customized_resume(label, raw_text, job_description),
        DocumentKind::CoverLetter => build_cover_letter(label),
        DocumentKind::Portfolio => build_portfolio(label),
    };

    let outputs = ArtifactFormat::for_kind(kind)
        .iter()
        .map(|&format| {
            let rendered = match format {
                ArtifactFormat::Docx => render_docx(&document.text),
                ArtifactFormat::Pdf => render_pdf(&document.text, &options.page),
                ArtifactFormat::Html => Ok(render_html(&build_portfolio_website(
                    label,
                    raw_text,
                    options.escape_html,
                ))),
            };
            (format, rendered)
        })
        .collect();

    let (artifacts, failures) = collect_outputs(kind, outputs);

    info!(
        "Exported {:?}: {} artifact(s), {} failure(s)",
        kind,
        artifacts.len(),
        failures.len()
    );

    ExportBundle {
        document,
        artifacts,
        failures,
    }
}

/// Splits renderer results into delivered artifacts and per-file failures, keeping order.
fn collect_outputs(
    kind: DocumentKind,
    outputs: Vec<(ArtifactFormat, Result<Bytes, RenderError>)>,
) -> (Vec<ExportArtifact>, Vec<RenderFailure>) {
    let mut artifacts = Vec::with_capacity(outputs.len());
    let mut failures = Vec::new();

    for (format, rendered) in outputs {
        let filename = format.filename(kind);
        match rendered {
            Ok(bytes) => artifacts.push(ExportArtifact {
                filename,
                media_type: format.media_type(),
                bytes,
            }),
            Err(e) => {
                warn!("Renderer for {filename} failed: {e}");
                failures.push(RenderFailure {
                    filename,
                    message: e.to_string(),
                });
            }
        }
    }

    (artifacts, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::a4_page_geometry;
    use crate::synthesis::documents::build_resume;

    fn options() -> ExportOptions {
        ExportOptions {
            page: a4_page_geometry(),
            escape_html: true,
        }
    }

    fn label() -> PredictedLabel {
        PredictedLabel::new("Data Science")
    }

    fn filenames(bundle: &ExportBundle) -> Vec<&str> {
        bundle.artifacts.iter().map(|a| a.filename.as_str()).collect()
    }

    const RAW: &str = "Experienced Python developer with 5 years in data science.";

    #[test]
    fn test_dispatch_resume_returns_docx_and_pdf() {
        let bundle = dispatch(DocumentKind::Resume, &label(), RAW, "", &options());

        assert_eq!(filenames(&bundle), vec!["resume.docx", "resume.pdf"]);
        assert!(bundle.failures.is_empty());
        assert!(bundle.artifacts.iter().all(|a| !a.bytes.is_empty()));
        assert_eq!(bundle.document, build_resume(&label()));
        assert!(bundle.document.text.contains("Target Role: Data Science"));
    }

    #[test]
    fn test_dispatch_resume_with_job_description_customizes() {
        let bundle = dispatch(
            DocumentKind::Resume,
            &label(),
            RAW,
            "Looking for an ML engineer",
            &options(),
        );
        assert!(bundle
            .document
            .text
            .starts_with("PROFESSIONAL RESUME (CUSTOMIZED)"));
        assert!(bundle.document.text.contains(RAW));
    }

    #[test]
    fn test_dispatch_cover_letter_returns_docx_and_pdf() {
        let bundle = dispatch(DocumentKind::CoverLetter, &label(), RAW, "ignored", &options());

        assert_eq!(filenames(&bundle), vec!["cover_letter.docx", "cover_letter.pdf"]);
        assert_eq!(bundle.document.kind, DocumentKind::CoverLetter);
        assert!(!bundle.document.text.contains("ignored"));
    }

    #[test]
    fn test_dispatch_portfolio_adds_html_built_from_raw_text() {
        let bundle = dispatch(DocumentKind::Portfolio, &label(), RAW, "", &options());

        assert_eq!(
            filenames(&bundle),
            vec!["portfolio.docx", "portfolio.pdf", "portfolio.html"]
        );

        let html = bundle.artifact("portfolio.html").unwrap();
        assert_eq!(html.media_type, "text/html; charset=utf-8");
        let page = std::str::from_utf8(&html.bytes).unwrap();
        assert!(page.contains(RAW));
        assert!(page.contains("<title>Portfolio - Data Science</title>"));
        assert!(!page.contains("ABOUT ME"));
    }

    #[test]
    fn test_media_types_are_fixed_per_format() {
        let bundle = dispatch(DocumentKind::Resume, &label(), RAW, "", &options());
        assert_eq!(
            bundle.artifact("resume.docx").unwrap().media_type,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(
            bundle.artifact("resume.pdf").unwrap().media_type,
            "application/pdf"
        );
    }

    #[test]
    fn test_filenames_ignore_label() {
        let weird = PredictedLabel::new("../../etc/passwd");
        let bundle = dispatch(DocumentKind::Portfolio, &weird, RAW, "", &options());
        assert_eq!(
            filenames(&bundle),
            vec!["portfolio.docx", "portfolio.pdf", "portfolio.html"]
        );
    }

    #[test]
    fn test_collect_outputs_keeps_other_artifacts_when_one_fails() {
        let outputs = vec![
            (
                ArtifactFormat::Docx,
                Err(RenderError::Docx("zip writer closed".to_string())),
            ),
            (ArtifactFormat::Pdf, Ok(Bytes::from_static(b"%PDF-1.5"))),
        ];

        let (artifacts, failures) = collect_outputs(DocumentKind::Resume, outputs);

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].filename, "resume.pdf");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].filename, "resume.docx");
        assert!(failures[0].message.contains("zip writer closed"));
    }
}
