//! Document builders: deterministic template assembly around a predicted label.
//!
//! None of these can fail and none look at the label's value beyond substituting it.

use serde::{Deserialize, Serialize};

use crate::classify::PredictedLabel;
use crate::render::html::html_page;
use crate::synthesis::templates::{
    fill_template, COVER_LETTER_TEMPLATE, CUSTOMIZED_RESUME_TEMPLATE, PLACEHOLDER_EMAIL,
    PLACEHOLDER_GITHUB, PLACEHOLDER_LINKEDIN, PORTFOLIO_TEMPLATE, RESUME_TEMPLATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    Portfolio,
}

impl DocumentKind {
    /// Filename stem shared by every artifact of this kind.
    pub fn file_stem(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover_letter",
            DocumentKind::Portfolio => "portfolio",
        }
    }
}

/// Synthesized plain text, tagged with what it is and which label produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    pub label: PredictedLabel,
    pub text: String,
}

impl GeneratedDocument {
    fn new(kind: DocumentKind, label: &PredictedLabel, text: String) -> Self {
        Self {
            kind,
            label: label.clone(),
            text,
        }
    }
}

pub fn build_resume(label: &PredictedLabel) -> GeneratedDocument {
    let text = fill_template(RESUME_TEMPLATE, &[("role", label.as_str())]);
    GeneratedDocument::new(DocumentKind::Resume, label, text)
}

pub fn build_cover_letter(label: &PredictedLabel) -> GeneratedDocument {
    let text = fill_template(COVER_LETTER_TEMPLATE, &[("role", label.as_str())]);
    GeneratedDocument::new(DocumentKind::CoverLetter, label, text)
}

pub fn build_portfolio(label: &PredictedLabel) -> GeneratedDocument {
    let text = fill_template(
        PORTFOLIO_TEMPLATE,
        &[
            ("role", label.as_str()),
            ("email", PLACEHOLDER_EMAIL),
            ("github", PLACEHOLDER_GITHUB),
            ("linkedin", PLACEHOLDER_LINKEDIN),
        ],
    );
    GeneratedDocument::new(DocumentKind::Portfolio, label, text)
}

/// Embeds the job description and the candidate's text verbatim under a static alignment
/// block. A blank job description yields exactly `build_resume(label)`.
pub fn build_customized_resume(
    label: &PredictedLabel,
    candidate_text: &str,
    job_description: &str,
) -> GeneratedDocument {
    if job_description.trim().is_empty() {
        return build_resume(label);
    }

    let text = fill_template(
        CUSTOMIZED_RESUME_TEMPLATE,
        &[
            ("role", label.as_str()),
            ("job_description", job_description),
            ("candidate_text", candidate_text),
        ],
    );
    GeneratedDocument::new(DocumentKind::Resume, label, text)
}

/// Single-page portfolio site around the candidate's own (un-normalized) text.
pub fn build_portfolio_website(label: &PredictedLabel, candidate_text: &str, escape: bool) -> String {
    html_page(
        &format!("Portfolio - {label}"),
        &format!("Portfolio \u{2013} {label}"),
        candidate_text,
        escape,
    )
}
